//! Core types and utilities

pub mod condition;
pub mod position;

pub use condition::Condition;
pub use position::Position;
