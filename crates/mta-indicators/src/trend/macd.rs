//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator built from two EMAs of close
//! and an EMA of their difference.

use mta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::OhlcvSeries,
    series::Series,
    traits::Indicator,
    utils,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacdConfig {
    /// Fast EMA span (default: 12).
    pub fast: usize,
    /// Slow EMA span (default: 26).
    pub slow: usize,
    /// Signal line EMA span (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    #[must_use]
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Check the spans.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] for a zero span and
    /// [`IndicatorError::InvalidParameter`] when `fast >= slow`.
    pub fn validate(&self) -> Result<()> {
        if self.fast == 0 || self.slow == 0 || self.signal == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }

        if self.fast >= self.slow {
            return Err(IndicatorError::InvalidParameter {
                name: "fast",
                value: self.fast.to_string(),
                expected: "fast span below slow span",
            });
        }
        Ok(())
    }
}

/// MACD output series, aligned with the input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdSeries<T: TaFloat> {
    /// MACD line (fast EMA - slow EMA).
    pub macd: Series<T>,
    /// Signal line (EMA of MACD line).
    pub signal: Series<T>,
    /// Histogram (MACD - Signal).
    pub histogram: Series<T>,
}

impl<T: TaFloat> MacdSeries<T> {
    /// Number of positions in each line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    /// Returns `true` when computed over an empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// MACD of `closes` with the given spans.
///
/// Both EMAs and the signal line use the first-sample seed, so every line is
/// defined from the first bar. `histogram[i] == macd[i] - signal[i]` holds at
/// every index.
///
/// # Example
///
/// ```rust
/// use mta_indicators::macd;
///
/// let out = macd(&[10.0, 10.0, 10.0], 12, 26, 9);
/// assert_eq!(out.macd.as_slice(), &[0.0, 0.0, 0.0]);
/// assert_eq!(out.histogram.as_slice(), &[0.0, 0.0, 0.0]);
/// ```
#[must_use]
pub fn macd<T: TaFloat>(closes: &[T], fast: usize, slow: usize, signal: usize) -> MacdSeries<T> {
    let fast_ema = utils::ema(closes, fast);
    let slow_ema = utils::ema(closes, slow);

    let macd_line = fast_ema.zip_with(&slow_ema, |f, s| f - s);
    let signal_line = utils::ema(macd_line.as_slice(), signal);
    let histogram = macd_line.zip_with(&signal_line, |m, s| m - s);

    MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    }
}

/// MACD (Moving Average Convergence Divergence) indicator.
///
/// # Formula
///
/// - MACD Line = EMA(fast) - EMA(slow)
/// - Signal Line = EMA(MACD Line, signal)
/// - Histogram = MACD Line - Signal Line
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Output = MacdSeries<T>;
    type Config = MacdConfig;

    fn new(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            _marker: core::marker::PhantomData,
        })
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        let MacdConfig { fast, slow, signal } = self.config;
        Ok(macd(data.close().as_slice(), fast, slow, signal))
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_macd_default_config() {
        let config = MacdConfig::default();
        assert_eq!(config.fast, 12);
        assert_eq!(config.slow, 26);
        assert_eq!(config.signal, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_macd_first_bar_is_zero() {
        let out = macd(&[100.0, 101.0, 103.0], 12, 26, 9);
        assert_eq!(out.len(), 3);
        assert_eq!(out.macd[0], 0.0);
        assert_eq!(out.signal[0], 0.0);
        assert_eq!(out.histogram[0], 0.0);
    }

    #[test]
    fn test_macd_hand_computed() {
        // fast span 1 tracks the input, slow span 3 has alpha 0.5
        let out = macd(&[2.0, 4.0, 6.0], 1, 3, 1);
        // slow: 2, 3, 4.5
        assert_eq!(out.macd.as_slice(), &[0.0, 1.0, 1.5]);
        // signal span 1 tracks the MACD line
        assert_eq!(out.signal.as_slice(), &[0.0, 1.0, 1.5]);
        assert_eq!(out.histogram.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_macd_histogram_identity() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let out = macd(&closes, 12, 26, 9);
        for i in 0..closes.len() {
            assert_relative_eq!(out.histogram[i], out.macd[i] - out.signal[i]);
        }
    }

    #[test]
    fn test_macd_rising_series_is_positive() {
        let closes: Vec<f64> = (1..=40).map(f64::from).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(out.macd.iter().skip(1).all(|&v| v > 0.0));
    }

    #[test]
    fn test_macd_invalid_spans() {
        assert!(matches!(
            Macd::<f64>::new(MacdConfig::new(26, 12, 9)),
            Err(IndicatorError::InvalidParameter { name: "fast", .. })
        ));
        assert!(matches!(
            Macd::<f64>::new(MacdConfig::new(12, 12, 9)),
            Err(IndicatorError::InvalidParameter { .. })
        ));
        assert_eq!(
            Macd::<f64>::new(MacdConfig::new(0, 26, 9)).err(),
            Some(IndicatorError::InvalidWindow(0))
        );
    }
}
