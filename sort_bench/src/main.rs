//! Runs the six sorts of `dnc_sort` on one shared input and reports how long each takes.

mod benchmark;
mod error;
mod measure;
mod patterns;
mod report;

use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::prelude::*;

use dnc_sort::{Algorithm, Parallelism, SortConfig};

use crate::benchmark::Plan;
use crate::error::BenchError;
use crate::patterns::Pattern;
use crate::report::Report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of elements to sort.
    #[arg(long, default_value_t = 100_000)]
    len: usize,

    /// Worker count, also the chunk count of the bounded merge sort. Defaults to all cores.
    #[arg(long)]
    parallelism: Option<usize>,

    /// Timed runs per algorithm, at least 3.
    #[arg(long, default_value_t = 5)]
    runs: usize,

    #[arg(long, value_enum, default_value_t = Pattern::RandomBounded)]
    pattern: Pattern,

    /// Seed of the input generator, random if not given.
    #[arg(long)]
    seed: Option<u64>,

    /// Comma separated algorithm names, all of them if not given.
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Where to write the bar chart.
    #[arg(long, default_value = "sort_report.txt")]
    report: PathBuf,

    /// Also write the results as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), BenchError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.runs < 3 {
        return Err(BenchError::InvalidArgs(format!(
            "--runs must be at least 3, got {}",
            args.runs
        )));
    }

    let parallelism = match args.parallelism {
        Some(degree) => Parallelism::new(degree)?,
        None => Parallelism::available(),
    };

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    info!("seed: {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let input = args.pattern.generate(args.len, &mut rng);

    let config = SortConfig::with_parallelism(parallelism);
    let pool = config.build_pool()?;
    info!(
        "sorting {} x {} on {} workers, {} runs each",
        args.len, args.pattern, parallelism, args.runs
    );

    let plan = Plan {
        algorithms: &algorithms,
        pattern: args.pattern,
        input: &input,
        parallelism,
        runs: args.runs,
    };
    let measurements = benchmark::run(&plan, &pool)?;

    let report = Report {
        pattern: args.pattern.to_string(),
        len: args.len,
        parallelism: parallelism.get(),
        runs: args.runs,
        seed,
        measurements,
    };

    print!("{}", report.table());

    report.write_bar_chart(&args.report)?;
    info!("bar chart written to {}", args.report.display());

    if let Some(path) = &args.json {
        report.write_json(path)?;
        info!("results written to {}", path.display());
    }

    Ok(())
}
