//! Aligned numeric columns.
//!
//! A [`Series`] holds one value per bar of the input it was derived from.
//! Positions that lack enough trailing history hold NaN, and the accessors
//! [`Series::value`] and [`Series::to_options`] surface those positions as
//! `None` so they can never be mistaken for a computed number.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// A contiguous column of floating-point values aligned with a bar series.
///
/// # Example
///
/// ```rust
/// use mta_core::Series;
///
/// let series: Series<f64> = Series::from_vec(vec![f64::NAN, 101.5, 99.8]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.value(0), None);
/// assert_eq!(series.value(1), Some(101.5));
/// assert_eq!(series.available_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series filled with a value.
    #[must_use]
    pub fn filled(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Create a series where every position is unavailable.
    #[must_use]
    pub fn unavailable(len: usize) -> Self {
        Self::filled(T::NAN, len)
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Get a reference to the raw value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The value at `index`, or `None` when out of range or unavailable.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<T> {
        self.data.get(index).and_then(|&x| x.to_option())
    }

    /// The last value, or `None` when empty or unavailable.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.data.last().and_then(|&x| x.to_option())
    }

    /// Get the last `n` values as a slice.
    ///
    /// If `n > len()`, returns the entire series.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[T] {
        let start = self.len().saturating_sub(n);
        &self.data[start..]
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Every position as an explicit option.
    #[must_use]
    pub fn to_options(&self) -> Vec<Option<T>> {
        self.data.iter().map(|&x| x.to_option()).collect()
    }

    /// Apply a function to each element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Self { data }
    }

    /// Combine two aligned series element by element.
    ///
    /// The result has the length of the shorter input.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self { data }
    }

    /// Number of positions holding a computed value.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_valid()).count()
    }

    /// Index of the first computed value, if any.
    #[must_use]
    pub fn first_available(&self) -> Option<usize> {
        self.data.iter().position(|x| x.is_valid())
    }

    /// Mean of all available values, `None` when there are none.
    #[must_use]
    pub fn mean(&self) -> Option<T> {
        let (sum, count) = self
            .data
            .iter()
            .filter(|x| x.is_valid())
            .fold((T::ZERO, 0usize), |(sum, count), &x| (sum + x, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / <T as TaFloat>::from_usize(count))
        }
    }

    /// Smallest available value.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .filter(|x| x.is_valid())
            .reduce(|acc, x| if x < acc { x } else { acc })
    }

    /// Largest available value.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .filter(|x| x.is_valid())
            .reduce(|acc, x| if x > acc { x } else { acc })
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: TaFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: TaFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}
