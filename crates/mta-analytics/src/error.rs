//! Error types for the analytics crate.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = core::result::Result<T, AnalyticsError>;

/// Errors raised by summary and correlation builders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A summary was requested over a series with no bars.
    #[error("Series is empty")]
    EmptySeries,

    /// A performance lookback of zero bars.
    #[error("Invalid lookback '{name}': {value} (must be > 0)")]
    InvalidLookback {
        /// Which lookback was rejected.
        name: &'static str,
        /// Provided value.
        value: usize,
    },

    /// Timestamp and close columns of one symbol differ in length.
    #[error("Length mismatch for '{symbol}': {timestamps} timestamps, {closes} closes")]
    LengthMismatch {
        /// Offending symbol.
        symbol: String,
        /// Number of timestamps supplied.
        timestamps: usize,
        /// Number of closes supplied.
        closes: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AnalyticsError::EmptySeries.to_string(), "Series is empty");
        let err = AnalyticsError::InvalidLookback {
            name: "one_week",
            value: 0,
        };
        assert_eq!(err.to_string(), "Invalid lookback 'one_week': 0 (must be > 0)");
    }
}
