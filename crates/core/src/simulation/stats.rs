use super::ModelConfig;
use crate::core_types::Condition;
use crate::grid::ForestGrid;
use serde::{Deserialize, Serialize};

/// Tree counts by condition at a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub tick: u64,
    pub fine: usize,
    pub on_fire: usize,
    pub burned_out: usize,
    pub total: usize,
}

impl SimulationStats {
    pub(crate) fn collect(grid: &ForestGrid, tick: u64) -> Self {
        let mut stats = SimulationStats {
            tick,
            fine: 0,
            on_fire: 0,
            burned_out: 0,
            total: 0,
        };
        for tree in grid.agents() {
            match tree.condition() {
                Condition::Fine => stats.fine += 1,
                Condition::OnFire => stats.on_fire += 1,
                Condition::BurnedOut => stats.burned_out += 1,
            }
            stats.total += 1;
        }
        stats
    }

    /// Number of trees in `condition`
    pub fn count(&self, condition: Condition) -> usize {
        match condition {
            Condition::Fine => self.fine,
            Condition::OnFire => self.on_fire,
            Condition::BurnedOut => self.burned_out,
        }
    }

    /// Fraction of trees burned out, 0 for an empty forest
    pub fn burned_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.burned_out as f64 / self.total as f64
        }
    }
}

/// Outcome of running one model until the fire dies or a tick limit is hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub config: ModelConfig,
    /// Ticks executed by the run
    pub ticks: u64,
    pub final_stats: SimulationStats,
    pub burned_fraction: f64,
    /// False when the tick limit stopped the run with trees still burning
    pub quiesced: bool,
}
