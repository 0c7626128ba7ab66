//! Period returns and the small statistics built on them.

use mta_core::{utils, Series, TaFloat};

/// Simple returns `(P_t - P_{t-1}) / P_{t-1}`, aligned with the input.
///
/// The first position and any position whose previous close is zero are
/// unavailable.
///
/// ```rust
/// use mta_analytics::returns::simple_returns;
///
/// let r = simple_returns(&[100.0_f64, 110.0, 99.0]);
/// assert_eq!(r.value(0), None);
/// assert!((r[1] - 0.1).abs() < 1e-12);
/// assert!((r[2] + 0.1).abs() < 1e-12);
/// ```
#[must_use]
pub fn simple_returns<T: TaFloat>(closes: &[T]) -> Series<T> {
    utils::pct_change(closes, 1)
}

/// Log returns `ln(P_t / P_{t-1})`, aligned with the input.
///
/// Unavailable at the first position and wherever either price is not
/// positive.
#[must_use]
pub fn log_returns<T: TaFloat>(closes: &[T]) -> Series<T> {
    (0..closes.len())
        .map(|i| {
            if i == 0 {
                return T::NAN;
            }
            let (prev, current) = (closes[i - 1], closes[i]);
            if prev > T::ZERO && current > T::ZERO {
                (current / prev).ln()
            } else {
                T::NAN
            }
        })
        .collect()
}

/// Available simple returns as `f64`, in order, with gaps dropped.
#[must_use]
pub fn available_returns<T: TaFloat>(closes: &[T]) -> Vec<f64> {
    simple_returns(closes)
        .to_options()
        .into_iter()
        .flatten()
        .map(TaFloat::to_f64_lossy)
        .collect()
}

/// Arithmetic mean, `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (ddof = 1), `None` below two values.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}
