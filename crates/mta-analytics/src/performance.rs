//! Trailing performance summary over a bar series.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mta_core::OhlcvSeries;

use crate::error::{AnalyticsError, Result};
use crate::returns::{available_returns, sample_std};

/// Lookbacks in bars for each performance horizon.
///
/// A lookback of `n` compares the latest close with the close `n` bars from
/// the end, counting the latest bar as the first. The defaults are 2, 7, 30,
/// 90 and 180 bars.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerformanceConfig {
    /// One day.
    pub one_day: usize,
    /// One week.
    pub one_week: usize,
    /// One month.
    pub one_month: usize,
    /// Three months.
    pub three_months: usize,
    /// Six months.
    pub six_months: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            one_day: 2,
            one_week: 7,
            one_month: 30,
            three_months: 90,
            six_months: 180,
        }
    }
}

impl PerformanceConfig {
    /// Reject zero lookbacks.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.horizons() {
            if value == 0 {
                return Err(AnalyticsError::InvalidLookback { name, value });
            }
        }
        Ok(())
    }

    fn horizons(&self) -> [(&'static str, usize); 5] {
        [
            ("one_day", self.one_day),
            ("one_week", self.one_week),
            ("one_month", self.one_month),
            ("three_months", self.three_months),
            ("six_months", self.six_months),
        ]
    }
}

/// Percent change from `reference` to `current`, `None` when the reference
/// is not a positive finite number.
#[must_use]
pub fn percent_change(current: f64, reference: f64) -> Option<f64> {
    if reference.is_finite() && reference > 0.0 && current.is_finite() {
        Some((current - reference) / reference * 100.0)
    } else {
        None
    }
}

/// Change of the last close against the close `lookback` bars from the end.
#[must_use]
pub fn lookback_change(closes: &[f64], lookback: usize) -> Option<f64> {
    if lookback == 0 || closes.len() < lookback {
        return None;
    }
    let current = *closes.last()?;
    percent_change(current, closes[closes.len() - lookback])
}

/// Performance figures for one instrument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceSummary {
    /// Latest close.
    pub current_price: f64,
    /// First close.
    pub start_price: f64,
    /// One-day change percent.
    pub performance_1d: Option<f64>,
    /// One-week change percent.
    pub performance_1w: Option<f64>,
    /// One-month change percent.
    pub performance_1m: Option<f64>,
    /// Three-month change percent.
    pub performance_3m: Option<f64>,
    /// Six-month change percent.
    pub performance_6m: Option<f64>,
    /// First-to-last change percent.
    pub performance_period: Option<f64>,
    /// Best of the available horizons.
    pub best_performance: Option<f64>,
    /// Worst of the available horizons.
    pub worst_performance: Option<f64>,
    /// Sample std of simple returns, in percent.
    pub volatility: Option<f64>,
    /// Highest high.
    pub max_price: Option<f64>,
    /// Lowest low.
    pub min_price: Option<f64>,
    /// Mean volume.
    pub average_volume: Option<f64>,
}

impl PerformanceSummary {
    /// Summarize a series. Horizons longer than the series are `None`.
    ///
    /// ```rust
    /// use mta_analytics::{PerformanceConfig, PerformanceSummary};
    /// use mta_core::{Bar, OhlcvSeries};
    ///
    /// let bars: OhlcvSeries<f64> = [100.0, 101.0, 105.0]
    ///     .iter()
    ///     .map(|&c| Bar::new(c, c + 1.0, c - 1.0, c, 1_000.0))
    ///     .collect();
    /// let summary = PerformanceSummary::from_series(&bars, &PerformanceConfig::default()).unwrap();
    ///
    /// assert_eq!(summary.performance_period, Some(5.0));
    /// assert_eq!(summary.performance_1w, None);
    /// assert_eq!(summary.max_price, Some(106.0));
    /// ```
    pub fn from_series(bars: &OhlcvSeries<f64>, config: &PerformanceConfig) -> Result<Self> {
        config.validate()?;
        let closes = bars.close().as_slice();
        let (Some(&start_price), Some(&current_price)) = (closes.first(), closes.last()) else {
            return Err(AnalyticsError::EmptySeries);
        };

        let performance_1d = lookback_change(closes, config.one_day);
        let performance_1w = lookback_change(closes, config.one_week);
        let performance_1m = lookback_change(closes, config.one_month);
        let performance_3m = lookback_change(closes, config.three_months);
        let performance_6m = lookback_change(closes, config.six_months);
        let performance_period = percent_change(current_price, start_price);

        let horizons = [
            performance_1d,
            performance_1w,
            performance_1m,
            performance_3m,
            performance_6m,
            performance_period,
        ];
        let available = horizons.iter().flatten().copied();
        let best_performance = available.clone().reduce(f64::max);
        let worst_performance = available.reduce(f64::min);

        let volatility = sample_std(&available_returns(closes)).map(|std| std * 100.0);

        Ok(Self {
            current_price,
            start_price,
            performance_1d,
            performance_1w,
            performance_1m,
            performance_3m,
            performance_6m,
            performance_period,
            best_performance,
            worst_performance,
            volatility,
            max_price: bars.high().max(),
            min_price: bars.low().min(),
            average_volume: bars.volume().mean(),
        })
    }
}
