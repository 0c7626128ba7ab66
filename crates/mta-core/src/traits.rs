//! Core trait definitions for indicators.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::TaFloat;
use crate::ohlcv::OhlcvSeries;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// An indicator is built from a validated configuration and computes its
/// output over a whole [`OhlcvSeries`] at once. Outputs are always aligned with
/// the input: one value per bar, unavailable where history is too short.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use mta_core::{Indicator, OhlcvSeries, Result, Series, TaFloat};
///
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Output = Series<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Result<Self> { /* ... */ }
///     fn min_periods(&self) -> usize { self.config.window }
///     fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync + Sized {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (zero window, bad
    /// multiplier, inverted spans).
    fn new(config: Self::Config) -> Result<Self>;

    /// Number of bars needed before the first available output value.
    fn min_periods(&self) -> usize;

    /// Perform batch calculation on an OHLCV series.
    ///
    /// # Errors
    ///
    /// Implementations in this workspace never fail on short input; errors are
    /// reserved for inconsistent data.
    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output>;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;
}
