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

use num_traits::{PrimInt, ToPrimitive};
use std::{
    iter::FusedIterator,
    ops::{Bound, Range, RangeBounds, RangeInclusive},
};

/// An integer interval whose bounds each carry their own inclusivity flag.
///
/// The four shapes `[lower, upper]`, `[lower, upper)`, `(lower, upper]` and
/// `(lower, upper)` are all representable. The boundary search produces
/// closed intervals exclusively, but callers are free to build any shape.
///
/// # Invariants
///
/// `lower` must always be less than or equal to `upper`. An interval may still
/// contain no integers, e.g. `[3, 3)` or `(3, 4)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

/// Number of integers in `[first, last]`, saturating at `usize::MAX`.
#[inline]
fn span<T>(first: T, last: T) -> usize
where
    T: PrimInt,
{
    let distance = match (first.to_i128(), last.to_i128()) {
        (Some(f), Some(l)) => l.checked_sub(f).and_then(|d| d.to_usize()),
        // Only reachable for `u128` values above `i128::MAX`, both non-negative.
        _ => first
            .to_u128()
            .zip(last.to_u128())
            .and_then(|(f, l)| l.checked_sub(f))
            .and_then(|d| d.to_usize()),
    };
    distance.map_or(usize::MAX, |d| d.saturating_add(1))
}

/// An iterator over the integers contained within an [`Interval`].
///
/// # Examples
///
/// ```rust
/// # use gallop_core::math::interval::Interval;
///
/// let iv = Interval::new(false, 1, true, 5);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalIterator<T>
where
    T: PrimInt,
{
    // Inclusive `(front, back)`; `None` once exhausted.
    remaining: Option<(T, T)>,
}

impl<T> Iterator for IntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            Some((front + T::one(), back))
        } else {
            None
        };
        Some(front)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            Some((front, back - T::one()))
        } else {
            None
        };
        Some(back)
    }
}

impl<T> ExactSizeIterator for IntervalIterator<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        self.remaining.map_or(0, |(front, back)| span(front, back))
    }
}

impl<T> FusedIterator for IntervalIterator<T> where T: PrimInt {}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval` from both bounds and their inclusivity.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(true, 0, false, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(lower_inclusive: bool, lower: T, upper_inclusive: bool, upper: T) -> Self {
        assert!(
            lower <= upper,
            "Invalid interval: lower bound must be less than or equal to upper bound"
        );
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }

    /// Creates a new `Interval` if the bounds are ordered.
    ///
    /// Returns `None` if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(true, 0, true, 10).is_some());
    /// assert!(Interval::try_new(true, 10, true, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lower_inclusive: bool, lower: T, upper_inclusive: bool, upper: T) -> Option<Self> {
        (lower <= upper).then_some(Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        })
    }

    /// Creates the closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// let iv = Interval::closed(3, 4);
    /// assert!(iv.is_lower_inclusive() && iv.is_upper_inclusive());
    /// assert_eq!(iv.len(), 2);
    /// ```
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(true, lower, true, upper)
    }

    /// Creates the half-open interval `[lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(true, lower, false, upper)
    }

    /// Creates the open interval `(lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(false, lower, false, upper)
    }

    /// Returns the lower bound of the interval.
    #[inline]
    pub const fn lower_bound(&self) -> T {
        self.lower
    }

    /// Returns the upper bound of the interval.
    #[inline]
    pub const fn upper_bound(&self) -> T {
        self.upper
    }

    /// Returns `true` if the lower bound belongs to the interval.
    #[inline]
    pub const fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Returns `true` if the upper bound belongs to the interval.
    #[inline]
    pub const fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// The smallest and largest contained integers, or `None` if there are none.
    #[inline]
    fn inclusive_bounds(&self) -> Option<(T, T)> {
        let first = if self.lower_inclusive {
            self.lower
        } else {
            self.lower.checked_add(&T::one())?
        };
        let last = if self.upper_inclusive {
            self.upper
        } else {
            self.upper.checked_sub(&T::one())?
        };
        (first <= last).then_some((first, last))
    }

    /// Returns the smallest integer contained in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open(3, 8).first(), Some(4));
    /// assert_eq!(Interval::open(3, 4).first(), None);
    /// ```
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.inclusive_bounds().map(|(first, _)| first)
    }

    /// Returns the largest integer contained in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed_open(3, 8).last(), Some(7));
    /// assert_eq!(Interval::closed(3, 8).last(), Some(8));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.inclusive_bounds().map(|(_, last)| last)
    }

    /// Returns the number of integers contained in the interval.
    ///
    /// Saturates at `usize::MAX` for intervals wider than the address space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(5, 8).len(), 4);
    /// assert_eq!(Interval::closed_open(5, 8).len(), 3);
    /// assert_eq!(Interval::open(5, 8).len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.inclusive_bounds()
            .map_or(0, |(first, last)| span(first, last))
    }

    /// Returns `true` if the interval contains no integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// assert!(Interval::closed_open(10, 10).is_empty());
    /// assert!(!Interval::closed(10, 10).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inclusive_bounds().is_none()
    }

    /// Returns `true` if `value` lies inside the interval, honoring inclusivity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(false, 0, true, 10);
    /// assert!(!iv.contains(0));
    /// assert!(iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let above_lower = if self.lower_inclusive {
            self.lower <= value
        } else {
            self.lower < value
        };
        let below_upper = if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        };
        above_lower && below_upper
    }

    /// Returns the contained integers as a `RangeInclusive`, or `None` if empty.
    ///
    /// Useful for slicing the sequence a boundary interval was computed over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// let values = [1, 1, 2, 2, 5];
    /// let run = Interval::closed(2usize, 3);
    /// assert_eq!(&values[run.to_range_inclusive().unwrap()], &[2, 2]);
    /// ```
    #[inline]
    pub fn to_range_inclusive(&self) -> Option<RangeInclusive<T>> {
        self.inclusive_bounds().map(|(first, last)| first..=last)
    }

    /// Creates an iterator over the integers in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gallop_core::math::interval::Interval;
    ///
    /// let iv = Interval::closed(1, 3);
    /// assert_eq!(iv.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntervalIterator<T> {
        IntervalIterator {
            remaining: self.inclusive_bounds(),
        }
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    /// The empty interval `[0, 0)`.
    #[inline]
    fn default() -> Self {
        Self::closed_open(T::zero(), T::zero())
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower_inclusive", &self.lower_inclusive)
            .field("lower", &self.lower)
            .field("upper_inclusive", &self.upper_inclusive)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_inclusive { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.upper_inclusive { ']' } else { ')' }
        )
    }
}

impl<T> RangeBounds<T> for Interval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        if self.lower_inclusive {
            Bound::Included(&self.lower)
        } else {
            Bound::Excluded(&self.lower)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.upper_inclusive {
            Bound::Included(&self.upper)
        } else {
            Bound::Excluded(&self.upper)
        }
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Range<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}
