use crate::agent::TreeCell;
use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`ForestFire`](super::ForestFire) model.
///
/// Identical configurations always produce identical runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Seed for the random source used during population
    pub seed: u64,
    /// Grid rows
    pub height: usize,
    /// Grid columns
    pub width: usize,
    /// Independent per-cell probability of a tree (0-1)
    pub density: f64,
}

impl ModelConfig {
    pub fn new(seed: u64, height: usize, width: usize, density: f64) -> Self {
        ModelConfig {
            seed,
            height,
            width,
            density,
        }
    }

    /// Check dimensions and density.
    ///
    /// # Errors
    /// `InvalidConfig` for a zero dimension, a grid too large to allocate, or a
    /// density that is not a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.height == 0 {
            return Err(SimError::InvalidConfig("height must be positive".into()));
        }
        if self.width == 0 {
            return Err(SimError::InvalidConfig("width must be positive".into()));
        }
        let slot_bytes = self
            .height
            .checked_mul(self.width)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Option<TreeCell>>()));
        if !slot_bytes.is_some_and(|bytes| bytes <= isize::MAX as usize) {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions overflow: {}x{}",
                self.height, self.width
            )));
        }
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(SimError::InvalidConfig(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Same grid and density with a different seed
    pub fn with_seed(&self, seed: u64) -> Self {
        ModelConfig { seed, ..self.clone() }
    }

    /// Number of grid slots. Only meaningful once [`validate`](Self::validate) passes.
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}
