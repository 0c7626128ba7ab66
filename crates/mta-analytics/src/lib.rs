//! # mta-analytics
//!
//! Cross-bar and cross-instrument analytics over OHLCV series:
//!
//! - [`returns`]: simple and log returns
//! - [`PerformanceSummary`]: trailing horizon changes, best/worst, volatility
//! - [`RiskReturn`]: annualized mean return and volatility
//! - [`CorrelationMatrix`]: pairwise correlation of returns
//! - [`bar_metrics`]: intrabar change and range for time-series exports
//!
//! # Example
//!
//! ```rust
//! use mta_analytics::prelude::*;
//! use mta_core::{Bar, OhlcvSeries};
//!
//! let bars: OhlcvSeries<f64> = (0..10)
//!     .map(|i| {
//!         let c = 50.0 + i as f64;
//!         Bar::new(c, c + 0.5, c - 0.5, c, 10_000.0).timestamp(i * 86_400_000)
//!     })
//!     .collect();
//!
//! let summary = PerformanceSummary::from_series(&bars, &PerformanceConfig::default())?;
//! assert_eq!(summary.current_price, 59.0);
//! assert!(summary.performance_1w.is_some());
//! assert!(summary.performance_1m.is_none());
//! # Ok::<(), mta_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod correlation;
pub mod error;
pub mod metrics;
pub mod performance;
pub mod prelude;
pub mod returns;
pub mod risk;

pub use correlation::{pearson, CorrelationMatrix};
pub use error::{AnalyticsError, Result};
pub use metrics::{bar_metrics, BarMetrics};
pub use performance::{lookback_change, percent_change, PerformanceConfig, PerformanceSummary};
pub use returns::{log_returns, simple_returns};
pub use risk::{RiskReturn, TRADING_DAYS_PER_YEAR};
