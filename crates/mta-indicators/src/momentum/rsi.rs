//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use mta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::OhlcvSeries,
    series::Series,
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsiConfig {
    /// The lookback period in differences (default: 14).
    pub window: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given window.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Check the window.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] for a zero window.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// RSI from average gain and average loss.
///
/// A zero average loss saturates at 100, including a flat window.
#[inline]
fn compute_rsi<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    if avg_loss == T::ZERO {
        return T::HUNDRED;
    }
    let rs = avg_gain / avg_loss;
    T::HUNDRED - T::HUNDRED / (T::ONE + rs)
}

/// Relative Strength Index of `closes`.
///
/// Average gain and average loss are the simple means of the positive
/// differences and of the magnitudes of negative differences over the last
/// `window` bar-to-bar differences. The first value is at index `window`
/// (`window + 1` closes); earlier positions are unavailable.
///
/// # Example
///
/// ```rust
/// use mta_indicators::rsi;
///
/// let out = rsi(&[1.0, 2.0, 3.0, 4.0], 3);
/// assert_eq!(out.to_options(), vec![None, None, None, Some(100.0)]);
/// ```
#[must_use]
pub fn rsi<T: TaFloat>(closes: &[T], window: usize) -> Series<T> {
    let len = closes.len();
    if window == 0 || len <= window {
        return Series::unavailable(len);
    }

    // gains[j] and losses[j] describe the move from closes[j] to closes[j + 1]
    let (gains, losses): (Vec<T>, Vec<T>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > T::ZERO {
                (change, T::ZERO)
            } else {
                (T::ZERO, -change)
            }
        })
        .unzip();

    let n = <T as TaFloat>::from_usize(window);
    let mut result = Vec::with_capacity(len);
    result.resize(window, T::NAN);

    // Windows are summed directly so a run without losses sums to exactly zero.
    for i in window..len {
        let range = i - window..i;
        let avg_gain = gains[range.clone()].iter().fold(T::ZERO, |acc, &g| acc + g) / n;
        let avg_loss = losses[range].iter().fold(T::ZERO, |acc, &l| acc + l) / n;
        result.push(compute_rsi(avg_gain, avg_loss));
    }

    Series::from_vec(result)
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Output = Series<T>;
    type Config = RsiConfig;

    fn new(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            _marker: core::marker::PhantomData,
        })
    }

    fn min_periods(&self) -> usize {
        self.config.window + 1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        Ok(rsi(data.close().as_slice(), self.config.window))
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
