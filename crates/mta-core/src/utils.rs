//! Rolling kernels shared by the indicators and analytics crates.
//!
//! Every function returns a [`Series`] with exactly the input's length.
//! Positions without enough trailing history are NaN (unavailable); a window
//! of zero yields an all-unavailable series rather than a panic.

use crate::num::TaFloat;
use crate::series::Series;

/// Compute Simple Moving Average (SMA).
///
/// For each index `i >= window - 1`, the mean of `data[i + 1 - window..=i]`.
///
/// # Example
///
/// ```rust
/// use mta_core::utils::sma;
///
/// let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = sma(&data, 3);
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // (1+2+3)/3
/// assert_eq!(result[4], 4.0); // (3+4+5)/3
/// ```
#[must_use]
pub fn sma<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    let sums = rolling_sum(data, window);
    if window == 0 {
        return sums;
    }
    let n = <T as TaFloat>::from_usize(window);
    sums.map(|sum| sum / n)
}

/// Compute rolling sum over a window.
#[must_use]
pub fn rolling_sum<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || data.len() < window {
        return Series::unavailable(data.len());
    }

    let mut result = Vec::with_capacity(data.len());
    result.resize(window - 1, T::NAN);

    // Initial window, then slide
    let mut sum = data[..window].iter().fold(T::ZERO, |acc, &x| acc + x);
    result.push(sum);

    for i in window..data.len() {
        sum = sum - data[i - window] + data[i];
        result.push(sum);
    }

    Series::from_vec(result)
}

/// Compute Exponential Moving Average (EMA) with a first-sample seed.
///
/// `α = 2 / (span + 1)`, `EMA[s] = data[s]` at the first valid sample `s`, then
/// `EMA[i] = α * data[i] + (1 - α) * EMA[i-1]`. This is the unadjusted
/// recurrence, so the output is defined from the first valid sample on with no
/// warm-up window. Positions before `s` are unavailable.
///
/// # Example
///
/// ```rust
/// use mta_core::utils::ema;
///
/// let data: [f64; 3] = [2.0, 4.0, 6.0];
/// let result = ema(&data, 3); // alpha = 0.5
/// assert_eq!(result[0], 2.0);
/// assert_eq!(result[1], 3.0);
/// assert_eq!(result[2], 4.5);
/// ```
#[must_use]
pub fn ema<T: TaFloat>(data: &[T], span: usize) -> Series<T> {
    if span == 0 {
        return Series::unavailable(data.len());
    }

    let alpha = T::TWO / <T as TaFloat>::from_usize(span + 1);
    let one_minus_alpha = T::ONE - alpha;

    let mut result = Vec::with_capacity(data.len());
    let mut current: Option<T> = None;

    for &x in data {
        current = match current {
            None if x.is_valid() => Some(x),
            None => None,
            // A gap in the input holds the previous average.
            Some(prev) if !x.is_valid() => Some(prev),
            Some(prev) => Some(alpha * x + one_minus_alpha * prev),
        };
        result.push(current.unwrap_or(T::NAN));
    }

    Series::from_vec(result)
}

/// Compute rolling variance over a window.
///
/// `ddof` is the delta degrees of freedom: 1 gives the sample
/// (Bessel-corrected) variance, 0 the population variance. A window not larger
/// than `ddof` has no defined variance and yields an all-unavailable series.
#[must_use]
pub fn rolling_variance<T: TaFloat>(data: &[T], window: usize, ddof: usize) -> Series<T> {
    if window <= ddof || data.len() < window {
        return Series::unavailable(data.len());
    }

    let means = sma(data, window);
    let divisor = <T as TaFloat>::from_usize(window - ddof);

    let mut result = Vec::with_capacity(data.len());
    result.resize(window - 1, T::NAN);

    // Two-pass per window keeps the result exact for the band symmetry checks
    for i in (window - 1)..data.len() {
        let mean = means[i];
        let sum_sq = data[i + 1 - window..=i].iter().fold(T::ZERO, |acc, &x| {
            let diff = x - mean;
            acc + diff * diff
        });
        result.push(sum_sq / divisor);
    }

    Series::from_vec(result)
}

/// Compute rolling standard deviation over a window.
///
/// See [`rolling_variance`] for the meaning of `ddof`.
///
/// # Example
///
/// ```rust
/// use mta_core::utils::rolling_std;
///
/// let data: [f64; 3] = [2.0, 4.0, 6.0];
/// let result = rolling_std(&data, 3, 1);
/// assert_eq!(result[2], 2.0);
/// ```
#[must_use]
pub fn rolling_std<T: TaFloat>(data: &[T], window: usize, ddof: usize) -> Series<T> {
    rolling_variance(data, window, ddof).map(|x| x.sqrt())
}

/// Compute fractional change: `(x[i] - x[i-periods]) / x[i-periods]`.
///
/// A zero base value leaves the position unavailable.
#[must_use]
pub fn pct_change<T: TaFloat>(data: &[T], periods: usize) -> Series<T> {
    if periods == 0 {
        return Series::unavailable(data.len());
    }

    (0..data.len())
        .map(|i| {
            if i < periods {
                return T::NAN;
            }
            let prev = data[i - periods];
            if prev == T::ZERO {
                T::NAN
            } else {
                (data[i] - prev) / prev
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_basic() {
        let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 2.0);
        assert_eq!(result[3], 3.0);
        assert_eq!(result[4], 4.0);
    }

    #[test]
    fn test_sma_window_larger_than_length() {
        let data: [f64; 2] = [1.0, 2.0];
        let result = sma(&data, 5);

        assert_eq!(result.len(), 2);
        assert_eq!(result.available_count(), 0);
    }

    #[test]
    fn test_sma_zero_window_keeps_alignment() {
        let data: [f64; 3] = [1.0, 2.0, 3.0];
        let result = sma(&data, 0);
        assert_eq!(result.len(), 3);
        assert_eq!(result.available_count(), 0);
    }

    #[test]
    fn test_sma_empty() {
        let result = sma::<f64>(&[], 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ema_first_sample_seed() {
        let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&data, 3);

        // alpha = 0.5
        assert_eq!(result[0], 1.0);
        assert_eq!(result[1], 1.5);
        assert_eq!(result[2], 2.25);
        assert_eq!(result[3], 3.125);
        assert_eq!(result[4], 4.0625);
    }

    #[test]
    fn test_ema_seeds_at_first_valid_sample() {
        let data: [f64; 4] = [f64::NAN, f64::NAN, 4.0, 8.0];
        let result = ema(&data, 3);

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 4.0);
        assert_eq!(result[3], 6.0);
    }

    #[test]
    fn test_rolling_sum() {
        let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_sum(&data, 3);

        assert!(result[1].is_nan());
        assert_eq!(result[2], 6.0);
        assert_eq!(result[3], 9.0);
        assert_eq!(result[4], 12.0);
    }

    #[test]
    fn test_rolling_std_sample() {
        let data: [f64; 5] = [2.0, 4.0, 4.0, 4.0, 5.0];
        let result = rolling_std(&data, 3, 1);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());

        // 2, 4, 4 -> mean 10/3, sample variance 4/3
        assert_relative_eq!(result[2], (4.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        // 4, 4, 4 -> zero spread
        assert_eq!(result[3], 0.0);
    }

    #[test]
    fn test_rolling_std_population() {
        let data: [f64; 4] = [2.0, 4.0, 4.0, 6.0];
        let result = rolling_std(&data, 4, 0);
        // mean 4, squared deviations 4+0+0+4 = 8, / 4 = 2
        assert_relative_eq!(result[3], 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rolling_variance_window_not_above_ddof() {
        let data: [f64; 3] = [1.0, 2.0, 3.0];
        let result = rolling_variance(&data, 1, 1);
        assert_eq!(result.len(), 3);
        assert_eq!(result.available_count(), 0);
    }

    #[test]
    fn test_pct_change() {
        let data: [f64; 4] = [100.0, 110.0, 0.0, 5.0];
        let result = pct_change(&data, 1);

        assert!(result[0].is_nan());
        assert_relative_eq!(result[1], 0.1, epsilon = 1e-12);
        assert_eq!(result[2], -1.0);
        // zero base
        assert!(result[3].is_nan());
    }
}
