//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n closes.

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

/// Configuration for the SMA indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
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

/// Simple moving average of `closes`.
///
/// `out[i]` is the mean of `closes[i + 1 - window..=i]` for `i >= window - 1`;
/// earlier positions are unavailable. Output length always equals input length.
///
/// # Example
///
/// ```rust
/// use mta_indicators::simple_moving_average;
///
/// let ma = simple_moving_average(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(ma.to_options(), vec![None, Some(1.5), Some(2.5), Some(3.5)]);
/// ```
#[must_use]
pub fn simple_moving_average<T: TaFloat>(closes: &[T], window: usize) -> Series<T> {
    utils::sma(closes, window)
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Output = Series<T>;
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            _marker: core::marker::PhantomData,
        })
    }

    fn min_periods(&self) -> usize {
        self.config.window
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        Ok(simple_moving_average(
            data.close().as_slice(),
            self.config.window,
        ))
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
