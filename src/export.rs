//! CSV exports.
//!
//! Unavailable values are written as empty cells, never as zero or a
//! sentinel string.

use std::io::{self, Write};

use indexmap::IndexMap;
use thiserror::Error;

use mta_analytics::{bar_metrics, CorrelationMatrix};
use mta_core::IndicatorError;
use mta_indicators::EnrichedSeries;
use mta_snapshot::{CategorizedSnapshot, SectorGroup, SectorSummary};

use crate::input::format_timestamp;
use crate::pipeline::PerformanceReport;

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV encoding error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Underlying writer error.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The enriched columns could not be assembled.
    #[error(transparent)]
    Frame(#[from] IndicatorError),
}

type Result<T> = core::result::Result<T, ExportError>;

fn number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(number).unwrap_or_default()
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// One row per bar: symbol, timestamp, the enriched columns, then the
/// intrabar metrics.
///
/// ```rust
/// use market_ta::export::write_enriched;
/// use mta_core::{Bar, OhlcvSeries};
/// use mta_indicators::enrich_series;
///
/// let bars: OhlcvSeries<f64> = (0..3)
///     .map(|i| Bar::new(10.0, 11.0, 9.0, 10.0 + i as f64, 100.0).timestamp(i * 60_000))
///     .collect();
/// let mut out = Vec::new();
/// write_enriched(&mut out, "ABC", &enrich_series(&bars)).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("stock_symbol,timestamp,open,high,low,close,volume,MA_5,"));
/// assert_eq!(text.lines().count(), 4);
/// ```
pub fn write_enriched<W: Write>(writer: W, symbol: &str, enriched: &EnrichedSeries<f64>) -> Result<()> {
    let frame = enriched.to_dataframe()?;
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["stock_symbol", "timestamp"];
    header.extend(frame.column_names());
    header.extend(["price_change", "price_change_percent", "daily_range", "daily_range_percent"]);
    wtr.write_record(&header)?;

    for (i, bar) in enriched.bars().iter().enumerate() {
        let mut record = vec![
            symbol.to_string(),
            bar.timestamp.and_then(format_timestamp).unwrap_or_default(),
        ];
        record.extend(frame.iter().map(|(_, column)| optional(column.value(i))));

        let metrics = bar_metrics(&bar);
        record.extend([
            number(metrics.price_change),
            number(metrics.price_change_percent),
            number(metrics.daily_range),
            number(metrics.daily_range_percent),
        ]);
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

const DASHBOARD_HEADER: [&str; 28] = [
    "stock_symbol",
    "company_name",
    "current_price",
    "previous_close",
    "price_change",
    "price_change_percent",
    "day_high",
    "day_low",
    "volume",
    "average_volume",
    "volume_ratio",
    "market_cap",
    "market_cap_billions",
    "fifty_two_week_high",
    "fifty_two_week_low",
    "sector",
    "volatility",
    "price_category",
    "change_category",
    "volume_category",
    "market_cap_category",
    "volatility_category",
    "sector_category",
    "is_gain",
    "is_loss",
    "is_high_volume",
    "is_high_volatility",
    "is_large_cap",
];

/// Full categorized snapshot table.
pub fn write_dashboard<W: Write>(writer: W, rows: &[CategorizedSnapshot]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(DASHBOARD_HEADER)?;
    for row in rows {
        let s = &row.snapshot;
        let m = &row.metrics;
        let f = &row.flags;
        wtr.write_record([
            s.symbol.clone(),
            text(s.name.as_deref()),
            number(s.price),
            number(s.previous_close),
            number(m.change),
            number(m.change_percent),
            number(s.day_high),
            number(s.day_low),
            number(s.volume),
            optional(s.average_volume),
            optional(m.volume_ratio),
            optional(s.market_cap),
            optional(m.market_cap_billions),
            optional(s.fifty_two_week_high),
            optional(s.fifty_two_week_low),
            text(s.sector.as_deref()),
            number(m.volatility_percent),
            row.price_category.to_string(),
            row.change_category.to_string(),
            row.volume_category.to_string(),
            row.market_cap_category.to_string(),
            row.volatility_category.to_string(),
            row.sector_category.to_string(),
            f.is_gain.to_string(),
            f.is_loss.to_string(),
            f.is_high_volume.to_string(),
            f.is_high_volatility.to_string(),
            f.is_large_cap.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reduced snapshot table for overview pages.
pub fn write_summary<W: Write>(writer: W, rows: &[CategorizedSnapshot]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "stock_symbol",
        "company_name",
        "sector",
        "sector_category",
        "current_price",
        "price_change_percent",
        "volume",
        "market_cap_category",
        "price_category",
        "change_category",
        "is_gain",
        "is_high_volume",
    ])?;
    for row in rows {
        let s = &row.snapshot;
        wtr.write_record([
            s.symbol.clone(),
            text(s.name.as_deref()),
            text(s.sector.as_deref()),
            row.sector_category.to_string(),
            number(s.price),
            number(row.metrics.change_percent),
            number(s.volume),
            row.market_cap_category.to_string(),
            row.price_category.to_string(),
            row.change_category.to_string(),
            row.flags.is_gain.to_string(),
            row.flags.is_high_volume.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per sector group with its mean change and total volume.
pub fn write_sector_summary<W: Write>(
    writer: W,
    summary: &IndexMap<SectorGroup, SectorSummary>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["sector_category", "stock_count", "mean_change_percent", "total_volume"])?;
    for (group, entry) in summary {
        wtr.write_record([
            group.to_string(),
            entry.count.to_string(),
            optional(entry.mean_change_percent),
            number(entry.total_volume),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per symbol of horizon performance and risk.
pub fn write_performance<W: Write>(writer: W, reports: &[PerformanceReport]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "stock_symbol",
        "current_price",
        "performance_1d",
        "performance_1w",
        "performance_1m",
        "performance_3m",
        "performance_6m",
        "performance_period",
        "best_performance",
        "worst_performance",
        "volatility",
        "max_price",
        "min_price",
        "avg_volume",
        "annual_return",
        "annual_volatility",
    ])?;
    for report in reports {
        let p = &report.summary;
        wtr.write_record([
            report.symbol.clone(),
            number(p.current_price),
            optional(p.performance_1d),
            optional(p.performance_1w),
            optional(p.performance_1m),
            optional(p.performance_3m),
            optional(p.performance_6m),
            optional(p.performance_period),
            optional(p.best_performance),
            optional(p.worst_performance),
            optional(p.volatility),
            optional(p.max_price),
            optional(p.min_price),
            optional(p.average_volume),
            optional(report.risk.map(|r| r.annual_return)),
            optional(report.risk.map(|r| r.annual_volatility)),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Square matrix with a leading `symbol` column.
pub fn write_correlation<W: Write>(writer: W, matrix: &CorrelationMatrix) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec!["symbol"];
    header.extend(matrix.symbols().iter().map(String::as_str));
    wtr.write_record(&header)?;
    for (symbol, row) in matrix.rows() {
        let mut record = vec![symbol.to_string()];
        record.extend(row.iter().copied().map(optional));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mta_snapshot::{categorize_snapshot, sector_summary, Snapshot};

    fn csv_text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_unavailable_is_empty_cell() {
        assert_eq!(number(f64::NAN), "");
        assert_eq!(optional(None), "");
        assert_eq!(optional(Some(1.5)), "1.5");
    }

    #[test]
    fn test_dashboard_row() {
        let snapshot = Snapshot::new("KO", 61.0, 64.5, 64.8, 60.9, 14_000_000.0).with_sector("Consumer Staples");
        let mut buf = Vec::new();
        write_dashboard(&mut buf, &[categorize_snapshot(&snapshot)]).unwrap();

        let text = csv_text(buf);
        let mut lines = text.lines();
        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(header.len(), DASHBOARD_HEADER.len());
        assert_eq!(row.len(), DASHBOARD_HEADER.len());

        let cell = |name: &str| row[header.iter().position(|h| *h == name).unwrap()];
        assert_eq!(cell("stock_symbol"), "KO");
        assert_eq!(cell("average_volume"), "");
        assert_eq!(cell("change_category"), "LargeDecrease");
        assert_eq!(cell("market_cap_category"), "Unknown");
        assert_eq!(cell("sector_category"), "Consumer");
        assert_eq!(cell("is_loss"), "true");
    }

    #[test]
    fn test_summary_columns() {
        let snapshot = Snapshot::new("T", 20.0, 20.0, 20.0, 20.0, 1.0).with_name("Test Co");
        let mut buf = Vec::new();
        write_summary(&mut buf, &[categorize_snapshot(&snapshot)]).unwrap();
        let text = csv_text(buf);
        assert_eq!(text.lines().nth(1), Some("T,Test Co,,Unknown,20,0,1,Unknown,Medium,Stable,false,false"));
    }

    #[test]
    fn test_sector_summary_rows() {
        let rows: Vec<_> = [
            Snapshot::new("KO", 61.0, 64.5, 64.8, 60.9, 14_000_000.0).with_sector("Consumer Staples"),
            Snapshot::new("PG", 150.0, 148.0, 151.0, 147.5, 6_000_000.0).with_sector("Consumer Defensive"),
            Snapshot::new("XOM", 110.0, 110.0, 111.0, 109.0, f64::NAN),
        ]
        .iter()
        .map(categorize_snapshot)
        .collect();

        let mut buf = Vec::new();
        write_sector_summary(&mut buf, &sector_summary(&rows)).unwrap();
        let text = csv_text(buf);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "sector_category,stock_count,mean_change_percent,total_volume");
        assert!(lines[1].starts_with("Consumer,2,"));
        assert!(lines[1].ends_with(",20000000"));
        assert_eq!(lines[2], "Unknown,1,0,0");
        assert_eq!(lines.len(), 3);
    }
}
