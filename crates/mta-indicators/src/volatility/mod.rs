//! Volatility indicators: Bollinger Bands and the sample rolling deviation
//! they are built on.

mod bollinger;

pub use bollinger::{bollinger_bands, BollingerBands, BollingerConfig, BollingerSeries};

use mta_core::{num::TaFloat, series::Series, utils};

/// Sample (Bessel-corrected) standard deviation over a trailing window.
///
/// Same gating as the simple moving average of the same window.
#[must_use]
pub fn rolling_std<T: TaFloat>(closes: &[T], window: usize) -> Series<T> {
    utils::rolling_std(closes, window, 1)
}
