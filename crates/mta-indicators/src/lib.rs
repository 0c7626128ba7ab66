//! # mta-indicators
//!
//! Technical indicators and the series enrichment engine for market-ta.
//!
//! - **Trend**: SMA, EMA, MACD
//! - **Momentum**: RSI
//! - **Volatility**: Bollinger Bands, rolling standard deviation
//!
//! Each indicator is available as a free function over a slice of closes and as
//! a configurable type implementing [`mta_core::Indicator`]. [`enrich_series`]
//! runs the full set over one instrument's bars.
//!
//! # Example
//!
//! ```
//! use mta_core::prelude::*;
//! use mta_indicators::prelude::*;
//!
//! let bars: OhlcvSeries<f64> = (0..30)
//!     .map(|i| {
//!         let close = 100.0 + f64::from(i);
//!         Bar::new(close, close + 1.0, close - 1.0, close, 1_000.0)
//!     })
//!     .collect();
//!
//! let rsi = Rsi::<f64>::new(RsiConfig::default()).unwrap();
//! let values = rsi.calculate(&bars).unwrap();
//! assert_eq!(values.latest(), Some(100.0));
//!
//! let enriched = enrich_series(&bars);
//! assert_eq!(enriched.len(), 30);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod enrich;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub mod prelude;

pub use prelude::*;
