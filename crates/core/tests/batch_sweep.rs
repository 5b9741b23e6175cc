use approx::assert_relative_eq;
use forest_fire_core::{density_sweep, mean_burned_fraction, run_batch, ForestFire, ModelConfig};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_parallel_batch_matches_sequential_runs() {
    let base = ModelConfig::new(500, 24, 24, 0.0);
    let configs = density_sweep(&base, &[0.4, 0.6, 0.8], 4);

    let batch = run_batch(&configs, 5_000).unwrap();
    assert_eq!(batch.len(), configs.len());

    for (config, summary) in configs.iter().zip(&batch) {
        let mut model = ForestFire::new(config.clone()).unwrap();
        let sequential = model.run_to_quiescence(5_000);
        assert_eq!(&sequential, summary);
    }
}

#[test]
fn test_full_density_burns_everything() {
    let configs = density_sweep(&ModelConfig::new(0, 10, 15, 0.0), &[1.0], 3);
    let summaries = run_batch(&configs, 1_000).unwrap();

    for summary in &summaries {
        assert!(summary.quiesced);
        assert_eq!(summary.ticks, 15);
        assert_relative_eq!(summary.burned_fraction, 1.0);
    }
    assert_relative_eq!(mean_burned_fraction(&summaries), 1.0);
}

#[test]
fn test_burned_fraction_grows_with_density() {
    // Well below and well above the percolation threshold of the square lattice
    let base = ModelConfig::new(42, 60, 60, 0.0);
    let sparse = run_batch(&density_sweep(&base, &[0.3], 5), 10_000).unwrap();
    let dense = run_batch(&density_sweep(&base, &[0.85], 5), 10_000).unwrap();

    let sparse_mean = mean_burned_fraction(&sparse);
    let dense_mean = mean_burned_fraction(&dense);
    assert!(sparse_mean < 0.2, "sparse mean {sparse_mean}");
    assert!(dense_mean > 0.8, "dense mean {dense_mean}");
}

#[test]
fn test_empty_batch() {
    let summaries = run_batch(&[], 10).unwrap();
    assert!(summaries.is_empty());
    assert_relative_eq!(mean_burned_fraction(&summaries), 0.0);
}
