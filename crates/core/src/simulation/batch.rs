//! Parallel runs of independent models
//!
//! Each model is still stepped on a single thread; rayon only spreads separate
//! models across the pool. Results come back in input order.

use super::{ForestFire, ModelConfig, RunSummary};
use crate::error::SimError;
use rayon::prelude::*;
use tracing::info;

/// Configurations for a density sweep.
///
/// For every density, `replicates` configs are produced with seeds
/// `base.seed, base.seed + 1, ...`.
pub fn density_sweep(base: &ModelConfig, densities: &[f64], replicates: u32) -> Vec<ModelConfig> {
    densities
        .iter()
        .flat_map(|&density| {
            (0..u64::from(replicates)).map(move |r| ModelConfig {
                density,
                ..base.with_seed(base.seed.wrapping_add(r))
            })
        })
        .collect()
}

/// Run every configuration to quiescence (or `max_ticks`) in parallel.
///
/// # Errors
/// The first configuration that fails validation, in input order.
pub fn run_batch(configs: &[ModelConfig], max_ticks: u64) -> Result<Vec<RunSummary>, SimError> {
    for config in configs {
        config.validate()?;
    }

    info!("Starting batch of {} runs (max_ticks={})", configs.len(), max_ticks);

    let summaries = configs
        .par_iter()
        .map(|config| {
            let mut model = ForestFire::new(config.clone())?;
            Ok(model.run_to_quiescence(max_ticks))
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    info!(
        "Batch complete: {} runs, mean burned fraction {:.3}",
        summaries.len(),
        mean_burned_fraction(&summaries)
    );
    Ok(summaries)
}

/// Mean of `burned_fraction` over the summaries, 0 for an empty slice
pub fn mean_burned_fraction(summaries: &[RunSummary]) -> f64 {
    if summaries.is_empty() {
        return 0.0;
    }
    summaries.iter().map(|s| s.burned_fraction).sum::<f64>() / summaries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_sweep_layout() {
        let base = ModelConfig::new(100, 5, 5, 0.0);
        let configs = density_sweep(&base, &[0.3, 0.7], 3);

        assert_eq!(configs.len(), 6);
        assert_eq!(
            configs.iter().map(|c| c.seed).collect::<Vec<_>>(),
            vec![100, 101, 102, 100, 101, 102]
        );
        assert!(configs[..3].iter().all(|c| c.density == 0.3));
        assert!(configs[3..].iter().all(|c| c.density == 0.7));
        assert!(configs.iter().all(|c| c.height == 5 && c.width == 5));
    }

    #[test]
    fn test_run_batch_rejects_invalid_config() {
        let configs = vec![
            ModelConfig::new(1, 4, 4, 0.5),
            ModelConfig::new(1, 4, 4, 2.0),
        ];
        assert!(matches!(
            run_batch(&configs, 10),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean_burned_fraction(&[]), 0.0);
    }
}
