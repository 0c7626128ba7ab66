//! # mta-core
//!
//! Core types and kernels shared by the market-ta crates.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Aligned column with NaN marking unavailable positions
//! - [`Bar`] and [`OhlcvSeries`] - OHLCV price data types
//! - [`validate_bars`] - Boundary check for ordering and value preconditions
//! - [`DataFrame`] - Named columns with deterministic ordering
//! - [`Indicator`] - Batch indicator computation trait
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use mta_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//! let ma = sma(closes.as_slice(), 3);
//!
//! assert_eq!(ma.len(), closes.len());
//! assert_eq!(ma.value(1), None);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataframe;
pub mod error;
pub mod num;
pub mod ohlcv;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;

pub use dataframe::DataFrame;
pub use error::{IndicatorError, MalformedReason, Result};
pub use num::TaFloat;
pub use ohlcv::{validate_bars, Bar, OhlcvSeries};
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig};
