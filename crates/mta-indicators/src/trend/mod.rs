//! Trend indicators.
//!
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod ema;
mod macd;
mod sma;

pub use ema::{exponential_moving_average, Ema, EmaConfig};
pub use macd::{macd, Macd, MacdConfig, MacdSeries};
pub use sma::{simple_moving_average, Sma, SmaConfig};
