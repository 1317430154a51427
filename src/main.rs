use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use elevator_dispatch::{report, Algorithm, Execution, Measurement, Simulation, SimulationConfig};
use peak_alloc::PeakAlloc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

#[derive(Parser, Debug)]
#[command(name = "elevator_dispatch")]
#[command(about = "Compare elevator dispatch algorithms on random workloads")]
struct Args {
    /// JSON file with simulation parameters (defaults are used when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the result table
    #[arg(short, long, default_value = report::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for workloads and start floors (random when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate workload sizes on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: available cores)
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Also draw a log-log SVG plot of the results to this path
    #[arg(long, value_name = "SVG")]
    plot: Option<PathBuf>,

    /// Which elevator's time is reported for a trial
    #[arg(long, value_enum)]
    measure: Option<MeasureArg>,

    /// Only run these algorithms, comma-separated
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MeasureArg {
    /// Elevator 0 of the fleet
    First,
    /// The fleet's longest elapsed time
    Slowest,
}

impl From<MeasureArg> for Measurement {
    fn from(arg: MeasureArg) -> Self {
        match arg {
            MeasureArg::First => Measurement::FirstElevator,
            MeasureArg::Slowest => Measurement::SlowestElevator,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("elevator_dispatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(measure) = args.measure {
        config.measurement = measure.into();
    }
    if !args.algorithms.is_empty() {
        config.algorithms = args.algorithms.clone();
    }
    let simulation = Simulation::new(config).context("Invalid simulation config")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let execution = if args.parallel {
        let threads = args.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        });
        Execution::Parallel { threads }
    } else {
        Execution::Sequential
    };
    info!(seed, ?execution, "starting simulation");

    bma_benchmark::benchmark_start!();
    let table = simulation
        .run_seeded(seed, execution)
        .context("simulation failed")?;
    bma_benchmark::benchmark_print!(1);

    let summary = report::publish(&table, &args.output, args.plot.as_deref())
        .with_context(|| format!("Failed to write results: {}", args.output.display()))?;
    println!("{summary}");
    info!(path = %args.output.display(), "profiling completed");

    info!(
        current_kb = PEAK_ALLOC.current_usage_as_kb(),
        peak_kb = PEAK_ALLOC.peak_usage_as_kb(),
        "memory usage"
    );
    Ok(())
}
