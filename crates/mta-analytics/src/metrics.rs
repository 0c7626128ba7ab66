//! Per-bar derived columns for the time-series export.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mta_core::Bar;

/// Intrabar change and range of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarMetrics {
    /// `close - open`.
    pub price_change: f64,
    /// `(close - open) / open * 100`, 0 when open is not positive.
    pub price_change_percent: f64,
    /// `high - low`.
    pub daily_range: f64,
    /// `(high - low) / close * 100`, 0 when close is not positive.
    pub daily_range_percent: f64,
}

/// Derive [`BarMetrics`] from a bar.
///
/// ```rust
/// use mta_analytics::bar_metrics;
/// use mta_core::Bar;
///
/// let m = bar_metrics(&Bar::new(100.0, 104.0, 99.0, 102.0, 0.0));
/// assert_eq!(m.price_change, 2.0);
/// assert_eq!(m.daily_range, 5.0);
/// ```
#[must_use]
pub fn bar_metrics(bar: &Bar<f64>) -> BarMetrics {
    let price_change = bar.close - bar.open;
    let daily_range = bar.range();
    BarMetrics {
        price_change,
        price_change_percent: if bar.open > 0.0 {
            price_change / bar.open * 100.0
        } else {
            0.0
        },
        daily_range,
        daily_range_percent: if bar.close > 0.0 {
            daily_range / bar.close * 100.0
        } else {
            0.0
        },
    }
}
