//! Command line front end for the quicksort pivot benchmarks.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;

use pivot_bench::command::{dispatch, Request, Response};
use pivot_bench::harness::SweepReport;
use pivot_bench::{rng, CaseType, Partitioning, PivotPolicy, Result, SortConfig, DEFAULT_MAX_DEPTH};

/// Quicksort performance benchmarking for first, last and random pivots
#[derive(Parser, Debug)]
#[command(name = "pivot-bench", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Args, Debug)]
struct Settings {
    /// Segments reached deeper than this are left unsorted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Partition scheme: legacy or three-way
    #[arg(long, global = true, default_value = "legacy")]
    partitioning: Partitioning,

    /// Seed for random pivots and average case inputs (default: $OVERRIDE_SEED or random)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time a single sort of one generated array
    Run {
        /// Pivot policy: first, last or random
        #[arg(short, long)]
        pivot: PivotPolicy,
        /// Case type: best, worst or average
        #[arg(short, long)]
        case: CaseType,
        /// Array size
        #[arg(short = 'n', long)]
        size: usize,
    },

    /// Time one pivot policy and case type over several sizes
    Bench {
        #[arg(short, long)]
        pivot: PivotPolicy,
        #[arg(short, long)]
        case: CaseType,
        /// Comma separated array sizes
        #[arg(short, long, value_delimiter = ',', required = true)]
        sizes: Vec<usize>,
    },

    /// Time all pivot policies against all case types
    Sweep {
        /// Comma separated array sizes (default: 100,500,1000,5000,10000,20000)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Vec<usize>,
        /// Write the report as JSON to this path, `-` for stdout
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so that `sweep --json -` output stays clean.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = SortConfig::default()
        .with_max_depth(cli.settings.max_depth)
        .with_partitioning(cli.settings.partitioning);

    let mut rng: StdRng = match cli.settings.seed {
        Some(seed) => rng::seeded(seed),
        None => rng::process_rng(),
    };

    let (request, json) = match cli.command {
        Command::Run { pivot, case, size } => (Request::Run { pivot, case, size }, None),
        Command::Bench { pivot, case, sizes } => (Request::Benchmark { pivot, case, sizes }, None),
        Command::Sweep { sizes, json } => (Request::Sweep { sizes }, json),
    };

    match dispatch(request, &config, &mut rng) {
        Response::Run {
            pivot,
            case,
            sample,
        } => {
            println!(
                "Time taken for {pivot} pivot on {case} case of size {}: {:.6} seconds",
                sample.size,
                sample.elapsed.as_secs_f64()
            );
        }
        Response::Benchmark(result) => print!("{result}"),
        Response::Sweep(report) => match json {
            Some(path) => write_report(&report, &path)?,
            None => print!("{report}"),
        },
    }

    Ok(())
}

fn write_report(report: &SweepReport, path: &Path) -> Result<()> {
    let json = report.to_json_pretty()?;
    if path.as_os_str() == "-" {
        println!("{json}");
    } else {
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote sweep report");
    }
    Ok(())
}
