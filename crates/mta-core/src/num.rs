//! Numeric type abstractions for indicator computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so the rolling kernels and indicators can be written once.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub trait MaybeSerde: serde::Serialize + serde::de::DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> MaybeSerde for T where T: serde::Serialize + serde::de::DeserializeOwned {}

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in indicator calculations.
///
/// `NAN` doubles as the "not enough history yet" marker inside every
/// [`Series`](crate::Series) produced by this workspace. Callers that need an
/// explicit optional value use [`TaFloat::to_option`].
///
/// # Example
///
/// ```rust
/// use mta_core::TaFloat;
///
/// fn compute_rsi<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
///     if avg_loss == T::ZERO {
///         return T::HUNDRED;
///     }
///     let rs = avg_gain / avg_loss;
///     T::HUNDRED - T::HUNDRED / (T::ONE + rs)
/// }
///
/// assert_eq!(compute_rsi(1.0_f64, 0.0), 100.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + MaybeSerde + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (percentages, RSI).
    const HUNDRED: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// `Some(self)` for a finite value, `None` for NaN or infinity.
    #[must_use]
    fn to_option(self) -> Option<Self> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
