//! Prelude module for convenient imports.
//!
//! ```rust
//! use mta_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
//! assert!(series.is_empty());
//! assert!(bar.is_bullish());
//! ```

pub use crate::dataframe::DataFrame;
pub use crate::num::TaFloat;
pub use crate::ohlcv::{validate_bars, Bar, OhlcvSeries};
pub use crate::series::Series;

pub use crate::error::{IndicatorError, MalformedReason, Result};

pub use crate::traits::Indicator;

pub use crate::utils::{ema, pct_change, rolling_std, rolling_sum, rolling_variance, sma};
