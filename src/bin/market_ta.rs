//! Command-line driver.
//!
//! Usage:
//!     market-ta [--config FILE] enrich --output DIR <BARS.csv>...
//!     market-ta [--config FILE] categorize --output DIR <SNAPSHOTS.json>
//!     market-ta [--config FILE] performance --output FILE <BARS.csv>...
//!     market-ta [--config FILE] correlate --output FILE <BARS.csv>...
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use market_ta::pipeline;
use market_ta::AppConfig;

#[derive(Parser)]
#[command(version, about = "Technical indicators and quote categorization for market-data files")]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Add MA, RSI, Bollinger and MACD columns to each bar file.
    Enrich {
        /// Directory for `<SYMBOL>_enriched.csv` files.
        #[arg(long, short, value_name = "DIR", default_value = "output")]
        output: PathBuf,
        /// Bar files; the file stem is the symbol.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Categorize a JSON array of quote snapshots.
    Categorize {
        /// Directory for the dashboard and summary files.
        #[arg(long, short, value_name = "DIR", default_value = "output")]
        output: PathBuf,
        /// Snapshot file.
        input: PathBuf,
    },
    /// Horizon performance and annualized risk per bar file.
    Performance {
        /// Output CSV.
        #[arg(long, short, value_name = "FILE", default_value = "output/performance_data.csv")]
        output: PathBuf,
        /// Bar files; the file stem is the symbol.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Return correlation matrix across bar files.
    Correlate {
        /// Output CSV.
        #[arg(long, short, value_name = "FILE", default_value = "output/correlation_matrix.csv")]
        output: PathBuf,
        /// Bar files; the file stem is the symbol.
        #[arg(required = true, num_args = 2..)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref()).context("loading configuration")?;

    match cli.cmd {
        Cmd::Enrich { output, inputs } => {
            let written = pipeline::run_enrich(&inputs, &output, &config)?;
            info!(files = written.len(), "enrich finished");
        }
        Cmd::Categorize { output, input } => {
            let categorized = pipeline::run_categorize(&input, &output, &config)?;
            info!(snapshots = categorized.len(), "categorize finished");
        }
        Cmd::Performance { output, inputs } => {
            let reports = pipeline::run_performance(&inputs, &output, &config)?;
            info!(symbols = reports.len(), "performance finished");
        }
        Cmd::Correlate { output, inputs } => {
            let matrix = pipeline::run_correlate(&inputs, &output)?;
            info!(symbols = matrix.len(), "correlate finished");
        }
    }

    Ok(())
}
