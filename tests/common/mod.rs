//! Shared fixtures for the workspace integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Assert `actual` is within `epsilon` of `expected`, absolute near zero and
/// relative otherwise.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    assert!(!actual.is_nan(), "{context}: got NaN, expected {expected}");
    let scale = expected.abs();
    let diff = (actual - expected).abs();
    if scale < 1e-6 {
        assert!(diff < epsilon, "{context}: expected {expected}, got {actual} (diff {diff:.2e})");
    } else {
        assert!(
            diff / scale < epsilon,
            "{context}: expected {expected}, got {actual} (rel diff {:.2e})",
            diff / scale
        );
    }
}

/// The 20-close scenario used across the workspace.
pub const SCENARIO_CLOSES: [f64; 20] = [
    10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0,
    21.0, 22.0, 23.0,
];

/// Write a bar CSV with one daily bar per close, starting 2024-01-01.
pub fn write_bars(dir: &Path, symbol: &str, closes: &[f64]) -> PathBuf {
    let mut text = String::from("timestamp,open,high,low,close,volume\n");
    for (i, close) in closes.iter().enumerate() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64);
        text.push_str(&format!(
            "{},{},{},{},{},{}\n",
            day.format("%Y-%m-%d"),
            close,
            close + 0.5,
            close - 0.5,
            close,
            1_000 + i * 10
        ));
    }
    let path = dir.join(format!("{symbol}.csv"));
    fs::write(&path, text).unwrap();
    path
}

/// Parse a CSV export into a header and rows of cells.
pub fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

/// Cell of `row` under column `name`.
pub fn cell<'a>(header: &[String], row: &'a [String], name: &str) -> &'a str {
    let index = header
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    &row[index]
}
