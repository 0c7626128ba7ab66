//! Named, equal-length columns in insertion order.
//!
//! Enriched output is flattened into a [`DataFrame`] before export so that the
//! column order seen by writers matches the order indicators were attached.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::ohlcv::OhlcvSeries;
use crate::series::Series;

/// Column-oriented table keyed by column name.
///
/// # Example
///
/// ```rust
/// use mta_core::{DataFrame, Series};
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("close", Series::from_vec(vec![100.0, 101.0, 102.0])).unwrap();
/// df.add_column("ma_2", Series::from_vec(vec![f64::NAN, 100.5, 101.5])).unwrap();
///
/// assert_eq!(df.len(), 3);
/// assert_eq!(df.column_names(), vec!["close", "ma_2"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct DataFrame<T: TaFloat> {
    columns: IndexMap<String, Series<T>>,
}

impl<T: TaFloat> Default for DataFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> DataFrame<T> {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Create an empty frame with room for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Frame holding the five price columns of `ohlcv`.
    #[must_use]
    pub fn from_ohlcv(ohlcv: &OhlcvSeries<T>) -> Self {
        let mut df = Self::with_capacity(5);
        df.columns.insert("open".to_string(), ohlcv.open().clone());
        df.columns.insert("high".to_string(), ohlcv.high().clone());
        df.columns.insert("low".to_string(), ohlcv.low().clone());
        df.columns.insert("close".to_string(), ohlcv.close().clone());
        df.columns.insert("volume".to_string(), ohlcv.volume().clone());
        df
    }

    /// Number of rows; zero for a frame without columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Look up a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Look up a column that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::MissingColumn`] when `name` is absent.
    pub fn column(&self, name: &str) -> Result<&Series<T>> {
        self.columns
            .get(name)
            .ok_or_else(|| IndicatorError::MissingColumn(name.to_string()))
    }

    /// Append a column at the end.
    ///
    /// # Errors
    ///
    /// Fails when the name is already taken or the length differs from the
    /// existing columns.
    pub fn add_column(&mut self, name: impl Into<String>, series: Series<T>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(IndicatorError::InvalidParameter {
                name: "column_name",
                value: name,
                expected: "unique column name",
            });
        }

        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: series.len(),
            });
        }

        self.columns.insert(name, series);
        Ok(())
    }

    /// New frame with only the named columns, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::MissingColumn`] for the first unknown name.
    pub fn select(&self, columns: &[&str]) -> Result<Self> {
        let mut result = Self::with_capacity(columns.len());
        for &name in columns {
            let series = self.column(name)?;
            result.columns.insert(name.to_string(), series.clone());
        }
        Ok(result)
    }

    /// One row as `(column, value)` pairs, unavailable cells as `None`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<(&str, Option<T>)>> {
        if index >= self.len() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|(name, series)| (name.as_str(), series.value(index)))
                .collect(),
        )
    }

    /// Iterate `(column_name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}
