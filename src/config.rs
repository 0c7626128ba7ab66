//! Application configuration loaded from TOML.
//!
//! Every section and field has a default, so an empty file is the same as
//! running without `--config`.
//!
//! ```toml
//! [indicators]
//! ma_windows = [5, 20, 50]
//!
//! [indicators.macd]
//! fast = 12
//! slow = 26
//! signal = 9
//!
//! [categorizer.price]
//! medium = 10.0
//!
//! [analytics]
//! periods_per_year = 252
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mta_analytics::{AnalyticsError, PerformanceConfig, TRADING_DAYS_PER_YEAR};
use mta_core::IndicatorError;
use mta_indicators::EnrichConfig;
use mta_snapshot::CategorizerConfig;

/// Errors raised while loading or validating [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The TOML was malformed or had unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An indicator setting was rejected.
    #[error("invalid [indicators] section: {0}")]
    Indicators(#[from] IndicatorError),
    /// An analytics setting was rejected.
    #[error("invalid [analytics] section: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Settings for the performance and risk analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Bars per year used to annualize return and volatility.
    pub periods_per_year: u32,
    /// Performance horizons.
    pub performance: PerformanceConfig,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            performance: PerformanceConfig::default(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Indicator windows and parameters.
    pub indicators: EnrichConfig,
    /// Snapshot thresholds and sector keywords.
    pub categorizer: CategorizerConfig,
    /// Performance and risk settings.
    pub analytics: AnalyticsSettings,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate()?;
        self.analytics.performance.validate()?;
        Ok(())
    }
}
