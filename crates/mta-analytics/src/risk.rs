//! Annualized risk and return.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::returns::{available_returns, mean, sample_std};

/// Trading periods per year for daily bars.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Annualized mean return and volatility of simple returns, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskReturn {
    /// `mean(r) * P * 100`.
    pub annual_return: f64,
    /// `std(r) * sqrt(P) * 100`, sample std.
    pub annual_volatility: f64,
    /// Number of returns used.
    pub observations: usize,
}

impl RiskReturn {
    /// Compute from closes, `None` when fewer than two returns are available.
    ///
    /// ```rust
    /// use mta_analytics::RiskReturn;
    ///
    /// assert!(RiskReturn::from_closes(&[100.0, 101.0], 252).is_none());
    /// let rr = RiskReturn::from_closes(&[100.0, 101.0, 100.0, 102.0], 252).unwrap();
    /// assert_eq!(rr.observations, 3);
    /// ```
    #[must_use]
    pub fn from_closes(closes: &[f64], periods_per_year: u32) -> Option<Self> {
        let returns = available_returns(closes);
        let std = sample_std(&returns)?;
        let periods = f64::from(periods_per_year);
        Some(Self {
            annual_return: mean(&returns)? * periods * 100.0,
            annual_volatility: std * periods.sqrt() * 100.0,
            observations: returns.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_growth() {
        // every return is exactly 100%
        let rr = RiskReturn::from_closes(&[1.0, 2.0, 4.0, 8.0], TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(rr.annual_return, 25_200.0);
        assert_relative_eq!(rr.annual_volatility, 0.0);
    }

    #[test]
    fn test_annualization() {
        let closes = [100.0, 110.0, 99.0];
        let rr = RiskReturn::from_closes(&closes, 4).unwrap();
        let r1 = 110.0 / 100.0 - 1.0;
        let r2 = 99.0 / 110.0 - 1.0;
        let m: f64 = (r1 + r2) / 2.0;
        let sd = (((r1 - m) * (r1 - m) + (r2 - m) * (r2 - m)) / 1.0_f64).sqrt();
        assert_relative_eq!(rr.annual_return, m * 4.0 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(rr.annual_volatility, sd * 2.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_input() {
        assert!(RiskReturn::from_closes(&[], 252).is_none());
        assert!(RiskReturn::from_closes(&[5.0], 252).is_none());
        assert!(RiskReturn::from_closes(&[5.0, 6.0], 252).is_none());
    }
}
