//! Forest Fire Simulation Core Library
//!
//! A cellular automaton of a wildfire spreading through a randomly seeded forest.
//! Every occupied grid cell holds a tree agent with a three-state lifecycle
//! (`Fine`, `OnFire`, `BurnedOut`). Fire starts along the left edge and spreads
//! through the von Neumann neighbourhood, one scheduler pass per tick, until it
//! burns out.
//!
//! ## Layout
//!
//! - [`grid::ForestGrid`]: fixed 2D slot array with neighbour queries
//! - [`agent::TreeCell`]: per-cell state and the spread rule
//! - [`scheduler::Scheduler`]: fixed-order activation of every tree
//! - [`simulation::ForestFire`]: seeded population and the tick loop
//!
//! ```
//! use forest_fire_core::{ForestFire, ModelConfig};
//!
//! let mut model = ForestFire::new(ModelConfig::new(42, 20, 20, 0.65)).unwrap();
//! let summary = model.run_to_quiescence(1_000);
//! assert!(summary.quiesced);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod agent;
pub mod grid;
pub mod scheduler;
pub mod simulation;

// Re-export core types
pub use core_types::{Condition, Position};
pub use error::SimError;

pub use agent::TreeCell;
pub use grid::ForestGrid;
pub use scheduler::Scheduler;
pub use simulation::{
    density_sweep, mean_burned_fraction, run_batch, ForestFire, ModelConfig, RunSummary,
    SimulationStats,
};
