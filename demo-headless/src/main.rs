use clap::Parser;
use forest_fire_core::{
    density_sweep, mean_burned_fraction, run_batch, Condition, ForestFire, ForestGrid,
    ModelConfig, Position, SimulationStats,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Forest fire cellular automaton with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire")]
#[command(about = "Forest fire spread on a seeded grid", long_about = None)]
struct Args {
    /// Seed for tree placement
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Grid rows
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Grid columns
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Probability that a cell holds a tree (0-1)
    #[arg(short, long, default_value_t = 0.65)]
    density: f64,

    /// Stop after this many ticks even if trees are still burning
    #[arg(short, long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Report every N ticks
    #[arg(short, long, default_value_t = 1)]
    report_interval: u64,

    /// Draw the grid at every report
    #[arg(long)]
    render: bool,

    /// Emit reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Run a parallel density sweep instead of a single model (comma separated)
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Runs per density in a sweep
    #[arg(long, default_value_t = 10)]
    replicates: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ModelConfig::new(args.seed, args.height, args.width, args.density);

    let outcome = if args.sweep.is_empty() {
        run_single(&args, config)
    } else {
        run_sweep(&args, &config)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run_single(args: &Args, config: ModelConfig) -> Result<(), forest_fire_core::SimError> {
    let mut model = ForestFire::new(config)?;
    let interval = args.report_interval.max(1);

    if !args.json {
        println!("=== Forest Fire ===\n");
        println!(
            "Grid: {}x{}, density {:.2}, seed {}",
            args.height, args.width, args.density, args.seed
        );
        println!("Trees: {}\n", model.grid().agent_count());
        println!(" Tick | Fine     | On Fire  | Burned Out");
        println!("------|----------|----------|-----------");
    }
    report(args, &model);

    while model.is_running() && model.tick() < args.max_ticks {
        model.step();
        if model.tick() % interval == 0 || !model.is_running() {
            report(args, &model);
        }
    }

    if !args.json {
        let stats = model.stats();
        println!("\n=== Simulation Complete ===");
        println!("Ticks: {}", stats.tick);
        println!(
            "Burned: {} of {} trees ({:.1}%)",
            stats.burned_out,
            stats.total,
            stats.burned_fraction() * 100.0
        );
        if model.is_running() {
            println!("Stopped at tick limit with {} trees still burning", stats.on_fire);
        }
    }
    Ok(())
}

fn run_sweep(args: &Args, base: &ModelConfig) -> Result<(), forest_fire_core::SimError> {
    let configs = density_sweep(base, &args.sweep, args.replicates);
    let summaries = run_batch(&configs, args.max_ticks)?;

    if args.json {
        for summary in &summaries {
            print_json(summary);
        }
        return Ok(());
    }

    println!("=== Density Sweep ===\n");
    println!(
        "Grid: {}x{}, {} replicates per density, base seed {}\n",
        args.height, args.width, args.replicates, args.seed
    );
    println!(" Density | Mean Burned | Mean Ticks");
    println!("---------|-------------|-----------");
    for chunk in summaries.chunks(args.replicates.max(1) as usize) {
        let mean_ticks =
            chunk.iter().map(|s| s.ticks as f64).sum::<f64>() / chunk.len() as f64;
        println!(
            " {:7.3} | {:10.1}% | {:10.1}",
            chunk[0].config.density,
            mean_burned_fraction(chunk) * 100.0,
            mean_ticks
        );
    }
    Ok(())
}

fn report(args: &Args, model: &ForestFire) {
    let stats = model.stats();
    if args.json {
        print_json(&stats);
    } else {
        print_row(&stats);
    }
    if args.render {
        println!("{}", render(model.grid()));
    }
}

fn print_row(stats: &SimulationStats) {
    println!(
        "{:5} | {:8} | {:8} | {:10}",
        stats.tick,
        stats.count(Condition::Fine),
        stats.count(Condition::OnFire),
        stats.count(Condition::BurnedOut)
    );
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => error!("Failed to serialize report: {e}"),
    }
}

/// ASCII map: `.` empty, `T` fine, `*` burning, `#` burned out
fn render(grid: &ForestGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(match grid.condition_at(Position::new(row, col)) {
                None => '.',
                Some(Condition::Fine) => 'T',
                Some(Condition::OnFire) => '*',
                Some(Condition::BurnedOut) => '#',
            });
        }
        out.push('\n');
    }
    out
}
