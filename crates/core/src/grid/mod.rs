//! Grid-based simulation modules

pub mod forest_grid;

pub use forest_grid::{sweep_order, ForestGrid};
