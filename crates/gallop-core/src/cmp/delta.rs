// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use super::Comparator;
use std::cmp::Ordering;

/// The error returned when a [`DeltaComparator`] is given an unusable tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidDeltaError {
    /// The rejected tolerance.
    pub delta: f64,
}

impl std::fmt::Display for InvalidDeltaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Delta must be a non-negative number, got {}",
            self.delta
        )
    }
}

impl std::error::Error for InvalidDeltaError {}

/// Compares `f64` values with a tolerance band.
///
/// Two values `a` and `b` compare `Equal` when `|a - b| <= delta`; otherwise
/// they are ordered by [`f64::total_cmp`].
///
/// Note that the induced equivalence is not transitive: with a delta of `1.0`,
/// `0.0 ~ 0.8` and `0.8 ~ 1.6`, yet `0.0` and `1.6` differ.
///
/// # Examples
///
/// ```rust
/// # use gallop_core::cmp::{Comparator, delta::DeltaComparator};
/// # use std::cmp::Ordering;
///
/// let cmp = DeltaComparator::new(0.5).unwrap();
/// assert_eq!(cmp.compare(&1.0, &1.4), Ordering::Equal);
/// assert_eq!(cmp.compare(&1.0, &1.6), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaComparator {
    delta: f64,
}

impl DeltaComparator {
    /// The tolerance used by [`DeltaComparator::default`].
    pub const DEFAULT_DELTA: f64 = 0.0001;

    /// Creates a comparator with the given tolerance.
    ///
    /// Returns an error if `delta` is negative or NaN.
    #[inline]
    pub fn new(delta: f64) -> Result<Self, InvalidDeltaError> {
        if delta.is_nan() || delta < 0.0 {
            return Err(InvalidDeltaError { delta });
        }
        Ok(Self { delta })
    }

    /// Returns the tolerance of this comparator.
    #[inline]
    pub const fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for DeltaComparator {
    #[inline]
    fn default() -> Self {
        Self {
            delta: Self::DEFAULT_DELTA,
        }
    }
}

impl Comparator<f64> for DeltaComparator {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        if (a - b).abs() <= self.delta {
            Ordering::Equal
        } else {
            a.total_cmp(b)
        }
    }
}

impl std::fmt::Display for DeltaComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeltaComparator(delta: {})", self.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delta() {
        let cmp = DeltaComparator::default();
        assert_eq!(cmp.delta(), DeltaComparator::DEFAULT_DELTA);
        assert_eq!(cmp.compare(&1.0, &1.00005), Ordering::Equal);
        assert_eq!(cmp.compare(&1.0, &1.001), Ordering::Less);
        assert_eq!(cmp.compare(&1.001, &1.0), Ordering::Greater);
    }

    #[test]
    fn test_band_is_inclusive() {
        let cmp = DeltaComparator::new(0.5).unwrap();
        assert_eq!(cmp.compare(&1.0, &1.5), Ordering::Equal);
        assert_eq!(cmp.compare(&-1.0, &-1.5), Ordering::Equal);
    }

    #[test]
    fn test_zero_delta_is_exact() {
        let cmp = DeltaComparator::new(0.0).unwrap();
        assert_eq!(cmp.compare(&2.0, &2.0), Ordering::Equal);
        assert_eq!(cmp.compare(&2.0, &2.0000001), Ordering::Less);
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert_eq!(
            DeltaComparator::new(-0.1),
            Err(InvalidDeltaError { delta: -0.1 })
        );
        assert!(DeltaComparator::new(f64::NAN).is_err());
        assert!(DeltaComparator::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        let cmp = DeltaComparator::default();
        assert_eq!(cmp.compare(&1.0, &f64::NAN), Ordering::Less);
        assert_eq!(cmp.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_error_display() {
        let err = DeltaComparator::new(-2.0).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Delta must be a non-negative number, got -2"
        );
    }
}
