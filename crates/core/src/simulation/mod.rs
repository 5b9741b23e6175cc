//! Forest fire model: seeded population, ignition edge and tick loop
//!
//! `ForestFire` owns the grid and the scheduler. Construction fills the grid with
//! trees by an independent density draw per slot and sets every tree in column 0
//! alight. Each call to [`ForestFire::step`] advances one tick.

pub mod batch;
pub mod config;
pub mod stats;

pub use batch::{density_sweep, mean_burned_fraction, run_batch};
pub use config::ModelConfig;
pub use stats::{RunSummary, SimulationStats};

use crate::agent::TreeCell;
use crate::core_types::{Condition, Position};
use crate::error::SimError;
use crate::grid::ForestGrid;
use crate::scheduler::Scheduler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Column where the fire front starts
pub const IGNITION_COLUMN: usize = 0;

/// Forest fire cellular automaton
#[derive(Debug, Clone)]
pub struct ForestFire {
    config: ModelConfig,
    grid: ForestGrid,
    scheduler: Scheduler,
    tick: u64,
}

impl ForestFire {
    /// Build a model, seeding the random source from `config.seed`.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn new(config: ModelConfig) -> Result<Self, SimError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Build a model drawing placement from a caller-provided generator.
    ///
    /// `config.seed` is kept for reporting only; reproducibility is up to `rng`.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn with_rng<R: Rng>(config: ModelConfig, rng: &mut R) -> Result<Self, SimError> {
        config.validate()?;

        let mut grid = ForestGrid::new(config.height, config.width);
        let mut scheduler = Scheduler::new();
        populate(&mut grid, &mut scheduler, config.density, rng)?;

        info!(
            "Forest fire model initialized: {}x{} grid ({} cells), density={:.3}, seed={}, trees={}, burning={}",
            config.height,
            config.width,
            config.cell_count(),
            config.density,
            config.seed,
            scheduler.len(),
            grid.count(Condition::OnFire)
        );

        Ok(ForestFire {
            config,
            grid,
            scheduler,
            tick: 0,
        })
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        let ignited = self.scheduler.step(&mut self.grid);
        self.tick += 1;
        debug!(
            "Tick {}: ignited={}, burning={}",
            self.tick,
            ignited,
            self.grid.count(Condition::OnFire)
        );
    }

    /// Step until no tree is burning or `max_ticks` ticks have run
    pub fn run_to_quiescence(&mut self, max_ticks: u64) -> RunSummary {
        let start = self.tick;
        while self.is_running() && self.tick - start < max_ticks {
            self.step();
        }

        let final_stats = self.stats();
        let quiesced = final_stats.on_fire == 0;
        if !quiesced {
            warn!(
                "Run stopped at tick limit {} with {} trees still burning",
                max_ticks, final_stats.on_fire
            );
        }

        RunSummary {
            config: self.config.clone(),
            ticks: self.tick - start,
            burned_fraction: final_stats.burned_fraction(),
            final_stats,
            quiesced,
        }
    }

    /// Whether any tree is still burning
    pub fn is_running(&self) -> bool {
        self.grid.agents().any(TreeCell::is_burning)
    }

    /// Ticks executed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn condition_at(&self, position: Position) -> Option<Condition> {
        self.grid.condition_at(position)
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats::collect(&self.grid, self.tick)
    }
}

/// Fill an empty grid and scheduler.
///
/// Visits every slot in sweep order and draws one uniform value per slot. A draw
/// below `density` places a tree there; trees on the ignition column start
/// burning. Each tree is placed on the grid and then scheduled, so scheduler
/// order matches population order.
///
/// # Errors
/// Placement or scheduling failures, which only happen if the grid or scheduler
/// were not empty.
pub fn populate<R: Rng>(
    grid: &mut ForestGrid,
    scheduler: &mut Scheduler,
    density: f64,
    rng: &mut R,
) -> Result<(), SimError> {
    let slots: Vec<Position> = grid.iterate_all().into_iter().map(|(pos, _)| pos).collect();

    for pos in slots {
        if rng.random::<f64>() >= density {
            continue;
        }
        let tree = if pos.col == IGNITION_COLUMN {
            TreeCell::burning(pos)
        } else {
            TreeCell::new(pos)
        };
        grid.place(pos, tree)?;
        scheduler.add(pos)?;
    }
    Ok(())
}
