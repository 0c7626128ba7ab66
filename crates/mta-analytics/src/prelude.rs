//! Convenient re-exports.
//!
//! ```rust
//! use mta_analytics::prelude::*;
//! ```

pub use crate::correlation::CorrelationMatrix;
pub use crate::error::{AnalyticsError, Result};
pub use crate::metrics::{bar_metrics, BarMetrics};
pub use crate::performance::{PerformanceConfig, PerformanceSummary};
pub use crate::returns::{log_returns, simple_returns};
pub use crate::risk::{RiskReturn, TRADING_DAYS_PER_YEAR};
