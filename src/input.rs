//! Reading bars and snapshots from files.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use mta_core::{validate_bars, Bar, IndicatorError, OhlcvSeries};
use mta_snapshot::Snapshot;

/// Errors raised while loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying file error.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// CSV syntax or field conversion error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// JSON syntax or shape error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A timestamp in none of the accepted formats.
    #[error("unrecognized timestamp '{value}' in row {row}")]
    Timestamp {
        /// 1-based data row.
        row: usize,
        /// Raw field text.
        value: String,
    },
    /// The bars failed validation.
    #[error(transparent)]
    Malformed(#[from] IndicatorError),
}

#[derive(Debug, Deserialize)]
struct BarRecord {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Parse a timestamp as epoch milliseconds, UTC.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
///
/// ```rust
/// use market_ta::input::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
/// assert_eq!(parse_timestamp("1970-01-01 00:00:01"), Some(1_000));
/// assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
/// assert_eq!(parse_timestamp("yesterday"), None);
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS` UTC.
#[must_use]
pub fn format_timestamp(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Read bars from CSV with the header `timestamp,open,high,low,close,volume`
/// and validate them.
pub fn read_bars_csv<R: Read>(reader: R) -> Result<OhlcvSeries<f64>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut bars = Vec::new();
    for (i, record) in reader.deserialize::<BarRecord>().enumerate() {
        let record = record?;
        let timestamp = parse_timestamp(&record.timestamp).ok_or_else(|| LoadError::Timestamp {
            row: i + 1,
            value: record.timestamp.clone(),
        })?;
        bars.push(
            Bar::new(record.open, record.high, record.low, record.close, record.volume)
                .timestamp(timestamp),
        );
    }
    validate_bars(&bars)?;
    Ok(OhlcvSeries::from_bars(&bars))
}

/// Load and validate one instrument's bars from a CSV file.
pub fn load_bars_csv(path: impl AsRef<Path>) -> Result<OhlcvSeries<f64>, LoadError> {
    let path = path.as_ref();
    let bars = read_bars_csv(File::open(path)?)?;
    debug!(path = %path.display(), bars = bars.len(), "loaded bars");
    Ok(bars)
}

/// Read a JSON array of snapshots.
pub fn read_snapshots_json<R: Read>(reader: R) -> Result<Vec<Snapshot>, LoadError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Load snapshots from a JSON file.
pub fn load_snapshots_json(path: impl AsRef<Path>) -> Result<Vec<Snapshot>, LoadError> {
    let path = path.as_ref();
    let snapshots = read_snapshots_json(File::open(path)?)?;
    debug!(path = %path.display(), snapshots = snapshots.len(), "loaded snapshots");
    Ok(snapshots)
}

/// Symbol for a bar file: the file stem, so `data/AAPL.csv` is `AAPL`.
#[must_use]
pub fn symbol_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
