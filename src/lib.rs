//! # market-ta
//!
//! File-based driver for the market technical-analysis workspace. It loads
//! OHLCV bars from CSV and quote snapshots from JSON, runs them through
//! [`mta_indicators`], [`mta_snapshot`] and [`mta_analytics`] with one
//! immutable [`AppConfig`], and writes CSV exports.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration |
//! | [`input`] | CSV bar and JSON snapshot loading |
//! | [`pipeline`] | per-symbol runs used by the CLI subcommands |
//! | [`export`] | CSV writers |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod export;
pub mod input;
pub mod pipeline;

pub use config::{AnalyticsSettings, AppConfig, ConfigError};
pub use export::ExportError;
pub use input::LoadError;
pub use pipeline::PerformanceReport;
