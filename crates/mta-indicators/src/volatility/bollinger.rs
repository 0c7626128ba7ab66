//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

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

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub num_std: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            window: 20,
            num_std: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    #[must_use]
    pub fn new(window: usize, num_std: f64) -> Self {
        Self { window, num_std }
    }

    /// Check the window and multiplier.
    ///
    /// The sample standard deviation needs at least two points, so a window of
    /// one is rejected along with zero.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] or
    /// [`IndicatorError::InvalidParameter`] for a non-positive `num_std`.
    pub fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(IndicatorError::InvalidWindow(self.window));
        }
        if !(self.num_std.is_finite() && self.num_std > 0.0) {
            return Err(IndicatorError::InvalidParameter {
                name: "num_std",
                value: self.num_std.to_string(),
                expected: "positive finite multiplier",
            });
        }
        Ok(())
    }
}

/// Bollinger Bands series output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerSeries<T: TaFloat> {
    /// Middle band (SMA).
    pub middle: Series<T>,
    /// Upper band (middle + k * std).
    pub upper: Series<T>,
    /// Lower band (middle - k * std).
    pub lower: Series<T>,
    /// Band width: (upper - lower) / middle.
    pub width: Series<T>,
}

/// Bollinger Bands of `closes`.
///
/// `middle = SMA(window)`, `upper/lower = middle ± k·rolling_std(window)` with
/// the sample standard deviation. All bands share the SMA's gating.
#[must_use]
pub fn bollinger_bands<T: TaFloat>(closes: &[T], window: usize, k: f64) -> BollingerSeries<T> {
    let middle = utils::sma(closes, window);
    let std = utils::rolling_std(closes, window, 1);
    let k = T::from_f64_lossy(k);

    let offset = std.map(|s| k * s);
    let upper = middle.zip_with(&offset, |m, o| m + o);
    let lower = middle.zip_with(&offset, |m, o| m - o);
    let width = upper
        .zip_with(&lower, |u, l| u - l)
        .zip_with(&middle, |spread, m| {
            if m == T::ZERO {
                T::NAN
            } else {
                spread / m
            }
        });

    BollingerSeries {
        middle,
        upper,
        lower,
        width,
    }
}

/// Bollinger Bands indicator.
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Output = BollingerSeries<T>;
    type Config = BollingerConfig;

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
        Ok(bollinger_bands(
            data.close().as_slice(),
            self.config.window,
            self.config.num_std,
        ))
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
