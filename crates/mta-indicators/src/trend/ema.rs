//! Exponential Moving Average (EMA) indicator.
//!
//! Weights decay geometrically with `α = 2 / (span + 1)`. The recurrence is
//! seeded with the first sample, so the average is defined from the first bar.

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

/// Configuration for the EMA indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaConfig {
    /// The span of the average (default: 12).
    pub span: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { span: 12 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given span.
    #[must_use]
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    /// Smoothing factor `2 / (span + 1)`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }

    /// Check the span.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] for a zero span.
    pub fn validate(&self) -> Result<()> {
        if self.span == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Exponential moving average of `values`.
///
/// `EMA[0] = x[0]`, `EMA[i] = α·x[i] + (1 − α)·EMA[i−1]`. Leading unavailable
/// values are skipped and the seed is taken at the first available one.
#[must_use]
pub fn exponential_moving_average<T: TaFloat>(values: &[T], span: usize) -> Series<T> {
    utils::ema(values, span)
}

/// Exponential Moving Average indicator over closes.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Output = Series<T>;
    type Config = EmaConfig;

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
        Ok(exponential_moving_average(
            data.close().as_slice(),
            self.config.span,
        ))
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
