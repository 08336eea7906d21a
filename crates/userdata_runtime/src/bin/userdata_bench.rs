//! `userdata-bench` entry point.
//!
//! ```bash
//! # interactive: press g to measure, q to quit
//! userdata-bench --kind vec-sorted
//!
//! # batch: five measurements of backend 4 over a 20x20x5 grid, as JSON
//! userdata-bench -k 4 -g 20,20,5 --runs 5 --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use userdata_foundation::BackendKind;
use userdata_runtime::{App, BenchConfig, GridInfo, Prompt, logging};

/// Measures per-window userdata access across storage backends.
#[derive(Parser, Debug)]
#[command(name = "userdata-bench", version, about, long_about = None)]
struct Cli {
    /// Backend, by index 0-7 or by name (baseline, native-slot, prop-string,
    /// prop-atom, hash-map, btree-map, vec-sorted, vec-unsorted)
    #[arg(short, long)]
    kind: BackendKind,

    /// Label grid as rows,columns,layers
    #[arg(short, long, default_value = "10,10,10")]
    grid: GridInfo,

    /// Passes over every handle per measurement
    #[arg(short, long, default_value_t = BenchConfig::DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for the initial values
    #[arg(long, default_value_t = BenchConfig::DEFAULT_SEED)]
    seed: u64,

    /// Run this many measurements and exit instead of prompting
    #[arg(long)]
    runs: Option<usize>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = logging::parse_level(&cli.log_level)?;
    logging::init(level, !cli.no_color)?;

    let config = BenchConfig::new(cli.kind)
        .with_grid(cli.grid)
        .with_samples(cli.samples)
        .with_seed(cli.seed);
    let app = App::new(config)?;

    match cli.runs {
        Some(runs) => batch(app, runs, cli.json),
        None => {
            let runs = Prompt::new(app)?.with_json(cli.json).run()?;
            info!(runs, "session closed");
            Ok(())
        }
    }
}

fn batch(mut app: App, runs: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..runs {
        let report = app.benchmark()?;
        if json {
            println!("{}", report.to_json()?);
        } else {
            println!("{report}");
        }
    }
    app.quit();
    Ok(())
}
