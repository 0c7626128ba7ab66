//! Error types for indicator configuration and input validation.
//!
//! Short input is never an error in this workspace: indicators mark the
//! affected positions as unavailable instead. Errors are reserved for
//! invalid parameters and for malformed bars rejected at the boundary.

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur while configuring an indicator or validating input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Invalid window size parameter.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Series length mismatch between aligned columns.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A bar violates the ordering or value preconditions of the engine.
    #[error("Malformed bar at index {index}: {reason}")]
    MalformedInput {
        /// Position of the offending bar.
        index: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    /// Column lookup failed.
    #[error("Missing column: '{0}'")]
    MissingColumn(String),
}

/// Reason a bar was rejected by [`validate_bars`](crate::ohlcv::validate_bars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Timestamp is not strictly greater than the previous bar's.
    #[error("timestamp is not strictly ascending")]
    NonAscendingTimestamp,
    /// A price is zero, negative, NaN or infinite.
    #[error("price must be positive and finite")]
    NonPositivePrice,
    /// Volume is negative, NaN or infinite.
    #[error("volume must be non-negative and finite")]
    NegativeVolume,
    /// High is below low.
    #[error("high is below low")]
    InvertedRange,
}
