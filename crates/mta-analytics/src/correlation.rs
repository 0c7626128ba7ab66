//! Pairwise return correlation across instruments.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mta_core::OhlcvSeries;

use crate::error::{AnalyticsError, Result};

/// Symmetric matrix of Pearson correlations of simple returns.
///
/// Each pair is correlated over the timestamps at which both symbols have a
/// return. A cell is `None` when fewer than two such observations exist or
/// either side has zero variance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationMatrix {
    symbols: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

/// Returns keyed by the timestamp of the later bar.
fn keyed_returns(timestamps: &[i64], closes: &[f64]) -> IndexMap<i64, f64> {
    (1..closes.len())
        .filter_map(|i| {
            let (prev, current) = (closes[i - 1], closes[i]);
            let r = (current - prev) / prev;
            (prev != 0.0 && r.is_finite()).then_some((timestamps[i], r))
        })
        .collect()
}

/// Pearson correlation, `None` below two points or with a constant side.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut vx, mut vy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some((cov / (vx * vy).sqrt()).clamp(-1.0, 1.0))
}

fn correlate(a: &IndexMap<i64, f64>, b: &IndexMap<i64, f64>) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .filter_map(|(ts, &x)| b.get(ts).map(|&y| (x, y)))
        .unzip();
    pearson(&xs, &ys)
}

impl CorrelationMatrix {
    /// Build from per-symbol `(timestamps, closes)` columns.
    ///
    /// ```rust
    /// use indexmap::IndexMap;
    /// use mta_analytics::CorrelationMatrix;
    ///
    /// let mut input = IndexMap::new();
    /// input.insert("A".to_string(), (vec![1, 2, 3, 4], vec![10.0, 11.0, 10.5, 12.0]));
    /// input.insert("B".to_string(), (vec![1, 2, 3, 4], vec![20.0, 22.0, 21.0, 24.0]));
    ///
    /// let matrix = CorrelationMatrix::from_closes(&input).unwrap();
    /// assert_eq!(matrix.get("A", "A"), Some(1.0));
    /// assert!(matrix.get("A", "B").unwrap() > 0.99);
    /// ```
    pub fn from_closes(input: &IndexMap<String, (Vec<i64>, Vec<f64>)>) -> Result<Self> {
        let mut keyed = Vec::with_capacity(input.len());
        for (symbol, (timestamps, closes)) in input {
            if timestamps.len() != closes.len() {
                return Err(AnalyticsError::LengthMismatch {
                    symbol: symbol.clone(),
                    timestamps: timestamps.len(),
                    closes: closes.len(),
                });
            }
            keyed.push(keyed_returns(timestamps, closes));
        }

        let n = keyed.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            // the diagonal is 1 whenever the series has usable variance
            values[i][i] = correlate(&keyed[i], &keyed[i]).map(|_| 1.0);
            for j in (i + 1)..n {
                let r = correlate(&keyed[i], &keyed[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            symbols: input.keys().cloned().collect(),
            values,
        })
    }

    /// Build from bar series. Bars without a timestamp align by position.
    pub fn from_series(input: &IndexMap<String, OhlcvSeries<f64>>) -> Result<Self> {
        let columns: IndexMap<String, (Vec<i64>, Vec<f64>)> = input
            .iter()
            .map(|(symbol, bars)| {
                let timestamps: Vec<i64> = bars
                    .timestamps()
                    .iter()
                    .enumerate()
                    .map(|(i, ts)| ts.unwrap_or(i as i64))
                    .collect();
                (symbol.clone(), (timestamps, bars.close().as_slice().to_vec()))
            })
            .collect();
        Self::from_closes(&columns)
    }

    /// Symbols in row/column order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Correlation between two symbols.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.symbols.iter().position(|s| s == a)?;
        let j = self.symbols.iter().position(|s| s == b)?;
        self.values[i][j]
    }

    /// `(symbol, row)` pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when no symbols were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mta_core::Bar;

    fn input(entries: &[(&str, Vec<i64>, Vec<f64>)]) -> IndexMap<String, (Vec<i64>, Vec<f64>)> {
        entries
            .iter()
            .map(|(s, ts, c)| ((*s).to_string(), (ts.clone(), c.clone())))
            .collect()
    }

    #[test]
    fn test_pearson() {
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap(), 1.0);
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap(), -1.0);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_perfectly_anticorrelated_returns() {
        let matrix = CorrelationMatrix::from_closes(&input(&[
            ("UP", vec![1, 2, 3, 4], vec![100.0, 110.0, 99.0, 108.9]),
            ("DOWN", vec![1, 2, 3, 4], vec![100.0, 90.0, 99.0, 89.1]),
        ]))
        .unwrap();
        assert_relative_eq!(matrix.get("UP", "DOWN").unwrap(), -1.0, epsilon = 1e-9);
        assert_eq!(matrix.get("UP", "DOWN"), matrix.get("DOWN", "UP"));
    }

    #[test]
    fn test_common_timestamps_only() {
        let matrix = CorrelationMatrix::from_closes(&input(&[
            ("A", vec![1, 2, 3, 4, 5], vec![10.0, 11.0, 12.0, 11.0, 13.0]),
            ("B", vec![4, 5, 6], vec![20.0, 21.0, 22.0]),
        ]))
        .unwrap();
        // B has returns at 5 and 6, A at 2..=5: one shared observation
        assert_eq!(matrix.get("A", "B"), None);
        assert_eq!(matrix.get("A", "A"), Some(1.0));
        assert_eq!(matrix.get("A", "missing"), None);
    }

    #[test]
    fn test_constant_series_undefined() {
        let matrix = CorrelationMatrix::from_closes(&input(&[
            ("FLAT", vec![1, 2, 3, 4], vec![5.0, 5.0, 5.0, 5.0]),
            ("MOVE", vec![1, 2, 3, 4], vec![5.0, 6.0, 5.0, 7.0]),
        ]))
        .unwrap();
        assert_eq!(matrix.get("FLAT", "FLAT"), None);
        assert_eq!(matrix.get("FLAT", "MOVE"), None);
        assert_eq!(matrix.rows().count(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let err = CorrelationMatrix::from_closes(&input(&[("X", vec![1, 2], vec![1.0])])).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::LengthMismatch {
                symbol: "X".to_string(),
                timestamps: 2,
                closes: 1,
            }
        );
    }

    #[test]
    fn test_from_series_positional() {
        let make = |closes: &[f64]| -> OhlcvSeries<f64> {
            closes.iter().map(|&c| Bar::new(c, c, c, c, 1.0)).collect()
        };
        let mut series = IndexMap::new();
        series.insert("A".to_string(), make(&[1.0, 2.0, 3.0, 5.0]));
        series.insert("B".to_string(), make(&[2.0, 4.0, 6.0, 10.0]));
        let matrix = CorrelationMatrix::from_series(&series).unwrap();
        assert_relative_eq!(matrix.get("A", "B").unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(matrix.symbols(), &["A".to_string(), "B".to_string()]);
    }
}
