//! Per-symbol runs of the engine over loaded inputs.
//!
//! The `run_*` functions are what the binary's subcommands call: they read
//! input files, run the libraries with one immutable [`AppConfig`] and write
//! the exports.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{debug, info, info_span, warn};

use mta_analytics::{CorrelationMatrix, PerformanceSummary, RiskReturn};
use mta_core::OhlcvSeries;
use mta_indicators::{enrich_series_with, EnrichedSeries};
use mta_snapshot::{
    categorize_snapshot_with, sector_summary, CategorizedSnapshot, CategorizerConfig, Snapshot,
};

use crate::config::AppConfig;
use crate::export;
use crate::input::{load_bars_csv, load_snapshots_json, symbol_from_path};

/// File name of the categorized snapshot export.
pub const DASHBOARD_FILE: &str = "dashboard_data.csv";
/// File name of the reduced snapshot export.
pub const SUMMARY_FILE: &str = "summary_data.csv";
/// File name of the per-sector aggregate export.
pub const SECTOR_FILE: &str = "sector_summary.csv";

/// Performance figures for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    /// Instrument symbol.
    pub symbol: String,
    /// Horizon changes and price extremes.
    pub summary: PerformanceSummary,
    /// Annualized risk and return, when enough history exists.
    pub risk: Option<RiskReturn>,
}

/// Enrich one symbol's bars.
pub fn enrich_symbol(symbol: &str, bars: &OhlcvSeries<f64>, config: &AppConfig) -> Result<EnrichedSeries<f64>> {
    let _span = info_span!("enrich", symbol).entered();
    let enriched = enrich_series_with(bars, &config.indicators)
        .with_context(|| format!("enriching {symbol}"))?;

    if let Some(latest) = enriched.latest() {
        debug!(
            bars = enriched.len(),
            close = latest.bar.close,
            rsi = ?latest.rsi,
            macd = ?latest.macd,
            "enriched"
        );
    }
    Ok(enriched)
}

/// Categorize every snapshot with one configuration.
#[must_use]
pub fn categorize_all(snapshots: &[Snapshot], config: &CategorizerConfig) -> Vec<CategorizedSnapshot> {
    let categorized: Vec<_> = snapshots
        .iter()
        .map(|snapshot| {
            let out = categorize_snapshot_with(snapshot, config);
            debug!(
                symbol = %snapshot.symbol,
                price = %out.price_category,
                change = %out.change_category,
                volume = %out.volume_category,
                "categorized"
            );
            out
        })
        .collect();
    info!(count = categorized.len(), "categorized snapshots");
    categorized
}

/// Performance and risk for one symbol.
pub fn performance_report(symbol: &str, bars: &OhlcvSeries<f64>, config: &AppConfig) -> Result<PerformanceReport> {
    let summary = PerformanceSummary::from_series(bars, &config.analytics.performance)
        .with_context(|| format!("summarizing {symbol}"))?;
    let risk = RiskReturn::from_closes(bars.close().as_slice(), config.analytics.periods_per_year);
    if risk.is_none() {
        warn!(symbol, bars = bars.len(), "too few bars for risk/return");
    }
    Ok(PerformanceReport {
        symbol: symbol.to_string(),
        summary,
        risk,
    })
}

/// Load bar files keyed by symbol, in argument order.
pub fn load_symbols(inputs: &[PathBuf]) -> Result<IndexMap<String, OhlcvSeries<f64>>> {
    let mut loaded = IndexMap::with_capacity(inputs.len());
    for path in inputs {
        let symbol = symbol_from_path(path);
        let bars = load_bars_csv(path).with_context(|| format!("loading bars from {}", path.display()))?;
        info!(symbol = %symbol, bars = bars.len(), "loaded");
        if loaded.insert(symbol.clone(), bars).is_some() {
            warn!(symbol = %symbol, path = %path.display(), "duplicate symbol, keeping the later file");
        }
    }
    Ok(loaded)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Enrich each bar file and write `<SYMBOL>_enriched.csv` into `out_dir`.
pub fn run_enrich(inputs: &[PathBuf], out_dir: &Path, config: &AppConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(inputs.len());
    for (symbol, bars) in load_symbols(inputs)? {
        let enriched = enrich_symbol(&symbol, &bars, config)?;
        let path = out_dir.join(format!("{symbol}_enriched.csv"));
        export::write_enriched(create(&path)?, &symbol, &enriched)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(symbol = %symbol, path = %path.display(), "wrote enriched series");
        written.push(path);
    }
    Ok(written)
}

/// Categorize a snapshot file and write the dashboard and summary exports.
pub fn run_categorize(input: &Path, out_dir: &Path, config: &AppConfig) -> Result<Vec<CategorizedSnapshot>> {
    let snapshots = load_snapshots_json(input)
        .with_context(|| format!("loading snapshots from {}", input.display()))?;
    let categorized = categorize_all(&snapshots, &config.categorizer);

    let path = out_dir.join(DASHBOARD_FILE);
    export::write_dashboard(create(&path)?, &categorized)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = categorized.len(), "wrote dashboard");

    let path = out_dir.join(SUMMARY_FILE);
    export::write_summary(create(&path)?, &categorized)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = categorized.len(), "wrote summary");

    let sectors = sector_summary(&categorized);
    let path = out_dir.join(SECTOR_FILE);
    export::write_sector_summary(create(&path)?, &sectors)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = sectors.len(), "wrote sector summary");
    Ok(categorized)
}

/// Summarize each bar file and write one performance table.
pub fn run_performance(inputs: &[PathBuf], output: &Path, config: &AppConfig) -> Result<Vec<PerformanceReport>> {
    let reports = load_symbols(inputs)?
        .iter()
        .map(|(symbol, bars)| performance_report(symbol, bars, config))
        .collect::<Result<Vec<_>>>()?;
    export::write_performance(create(output)?, &reports)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), rows = reports.len(), "wrote performance table");
    Ok(reports)
}

/// Correlate the returns of each bar file and write the matrix.
pub fn run_correlate(inputs: &[PathBuf], output: &Path) -> Result<CorrelationMatrix> {
    let matrix = CorrelationMatrix::from_series(&load_symbols(inputs)?)?;
    export::write_correlation(create(output)?, &matrix)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), symbols = matrix.len(), "wrote correlation matrix");
    Ok(matrix)
}
