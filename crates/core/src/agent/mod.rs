//! Per-cell tree agents

pub mod tree_cell;

pub use tree_cell::{step, TreeCell};
