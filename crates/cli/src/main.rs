//! Branch predictor results table CLI.
//!
//! Reads one result file per benchmark from a results directory and prints the
//! combined table on stdout, ready to paste into a spreadsheet:
//! 1. **Default run:** The lab's 11 benchmarks, two placeholder rows, tab-separated.
//! 2. **Config run:** A JSON file replaces the benchmark list, gap, or layout.
//!
//! Log output goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bpresults_core::{Layout, ResultTable, TableConfig, Validation};

#[derive(Parser, Debug)]
#[command(
    name = "bpresults",
    author,
    version,
    about = "Collect branch predictor results into a tab-separated table",
    long_about = "Collect branch predictor results into a tab-separated table.\n\nEach benchmark's result file holds one line of four label/value pairs\n(takenCorrect, takenIncorrect, notTakenCorrect, notTakenIncorrect). The table has\none row per benchmark and one column per category.\n\nExamples:\n  bpresults results/\n  bpresults --layout blocks results/\n  bpresults --config fp-only.json --numeric results/"
)]
struct Cli {
    /// Directory holding the per-benchmark result files.
    results_dir: PathBuf,

    /// JSON table configuration (benchmark list, gap, validation, layout).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject result values that are not unsigned integers.
    #[arg(long)]
    numeric: bool,

    /// Output layout; overrides the configuration file.
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// One tab-separated row per benchmark.
    Rows,
    /// One block per category.
    Blocks,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Rows => Self::Rows,
            LayoutArg::Blocks => Self::Blocks,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Loads the configuration, builds the table, and writes it to stdout.
///
/// Nothing is written unless every result file was read and parsed.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref(), cli.numeric, cli.layout)?;
    tracing::debug!(
        dir = %cli.results_dir.display(),
        validation = ?config.validation,
        layout = ?config.layout,
        "building results table"
    );
    let table = ResultTable::build(&cli.results_dir, &config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(table.render(config.layout).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Resolves the effective configuration: file (or defaults), then command-line overrides.
fn load_config(
    path: Option<&Path>,
    numeric: bool,
    layout: Option<LayoutArg>,
) -> bpresults_core::Result<TableConfig> {
    let mut config = match path {
        Some(p) => TableConfig::from_file(p)?,
        None => TableConfig::default(),
    };
    if numeric {
        config.validation = Validation::Numeric;
    }
    if let Some(layout) = layout {
        config.layout = layout.into();
    }
    Ok(config)
}
