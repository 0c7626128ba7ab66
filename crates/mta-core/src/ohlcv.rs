//! OHLCV (Open, High, Low, Close, Volume) data types.
//!
//! Bars arrive from an external collector. [`validate_bars`] is the boundary
//! check for the ordering and value preconditions the indicator engine relies
//! on; everything downstream assumes validated input.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, MalformedReason, Result};
use crate::num::TaFloat;
use crate::series::Series;

/// A single OHLCV price bar.
///
/// # Example
///
/// ```rust
/// use mta_core::Bar;
///
/// let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0).timestamp(1_700_000_000_000);
/// assert_eq!(bar.range(), 7.0);
/// assert_eq!(bar.timestamp, Some(1_700_000_000_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Bar<T: TaFloat> {
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume during the period.
    pub volume: T,
    /// Bar open time as Unix epoch milliseconds.
    pub timestamp: Option<i64>,
}

impl<T: TaFloat> Bar<T> {
    /// Create a new bar without a timestamp.
    #[must_use]
    pub fn new(open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp: None,
        }
    }

    /// Set the timestamp on an existing bar (builder pattern).
    #[must_use]
    pub fn timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Compute the bar's range: High - Low.
    #[must_use]
    pub fn range(&self) -> T {
        self.high - self.low
    }

    /// Check if the bar is bullish (close > open).
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check the value preconditions of a single bar.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`MalformedReason`].
    pub fn check(&self) -> core::result::Result<(), MalformedReason> {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|&p| !p.is_valid() || p <= T::ZERO) {
            return Err(MalformedReason::NonPositivePrice);
        }
        if !self.volume.is_valid() || self.volume < T::ZERO {
            return Err(MalformedReason::NegativeVolume);
        }
        if self.high < self.low {
            return Err(MalformedReason::InvertedRange);
        }
        Ok(())
    }
}

/// Reject bars the indicator engine is not required to handle.
///
/// Checks every bar with [`Bar::check`] and requires timestamps, where present,
/// to be strictly ascending (which also rules out duplicates).
///
/// # Errors
///
/// Returns [`IndicatorError::MalformedInput`] naming the first offending bar.
pub fn validate_bars<T: TaFloat>(bars: &[Bar<T>]) -> Result<()> {
    let mut previous: Option<i64> = None;
    for (index, bar) in bars.iter().enumerate() {
        bar.check()
            .map_err(|reason| IndicatorError::MalformedInput { index, reason })?;

        if let Some(ts) = bar.timestamp {
            if previous.is_some_and(|prev| ts <= prev) {
                return Err(IndicatorError::MalformedInput {
                    index,
                    reason: MalformedReason::NonAscendingTimestamp,
                });
            }
            previous = Some(ts);
        }
    }
    Ok(())
}

/// A columnar storage of OHLCV data for one instrument.
///
/// # Example
///
/// ```rust
/// use mta_core::{Bar, OhlcvSeries};
///
/// let mut ohlcv: OhlcvSeries<f64> = OhlcvSeries::new();
/// ohlcv.push(Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0));
/// ohlcv.push(Bar::new(103.0, 108.0, 101.0, 107.0, 1_200_000.0));
///
/// assert_eq!(ohlcv.len(), 2);
/// assert_eq!(ohlcv.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct OhlcvSeries<T: TaFloat> {
    open: Series<T>,
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
    volume: Series<T>,
    timestamps: Vec<Option<i64>>,
}

impl<T: TaFloat> OhlcvSeries<T> {
    /// Create a new empty OHLCV series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new OHLCV series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Series::with_capacity(capacity),
            high: Series::with_capacity(capacity),
            low: Series::with_capacity(capacity),
            close: Series::with_capacity(capacity),
            volume: Series::with_capacity(capacity),
            timestamps: Vec::with_capacity(capacity),
        }
    }

    /// Build a series from bars in order.
    #[must_use]
    pub fn from_bars(bars: &[Bar<T>]) -> Self {
        let mut series = Self::with_capacity(bars.len());
        for bar in bars {
            series.push(*bar);
        }
        series
    }

    /// Returns the number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Append a bar to the series.
    pub fn push(&mut self, bar: Bar<T>) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
        self.timestamps.push(bar.timestamp);
    }

    /// Get a bar at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar<T>> {
        if index >= self.len() {
            return None;
        }

        Some(Bar {
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
            timestamp: self.timestamps[index],
        })
    }

    /// Get the last bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<Bar<T>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns a reference to the open prices series.
    #[must_use]
    pub fn open(&self) -> &Series<T> {
        &self.open
    }

    /// Returns a reference to the high prices series.
    #[must_use]
    pub fn high(&self) -> &Series<T> {
        &self.high
    }

    /// Returns a reference to the low prices series.
    #[must_use]
    pub fn low(&self) -> &Series<T> {
        &self.low
    }

    /// Returns a reference to the close prices series.
    #[must_use]
    pub fn close(&self) -> &Series<T> {
        &self.close
    }

    /// Returns a reference to the volume series.
    #[must_use]
    pub fn volume(&self) -> &Series<T> {
        &self.volume
    }

    /// Per-bar timestamps, `None` where the collector supplied none.
    #[must_use]
    pub fn timestamps(&self) -> &[Option<i64>] {
        &self.timestamps
    }

    /// Returns an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = Bar<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Run [`validate_bars`] over the stored bars.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::MalformedInput`] for the first bad bar.
    pub fn validate(&self) -> Result<()> {
        let bars: Vec<Bar<T>> = self.iter().collect();
        validate_bars(&bars)
    }
}

impl<T: TaFloat> FromIterator<Bar<T>> for OhlcvSeries<T> {
    fn from_iter<I: IntoIterator<Item = Bar<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        for bar in iter {
            series.push(bar);
        }
        series
    }
}
