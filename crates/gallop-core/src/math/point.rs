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

use crate::cmp::{Comparator, delta::DeltaComparator};
use std::cmp::Ordering;

/// An immutable point in screen coordinates; the origin is the top-left corner.
///
/// Equality is exact: coordinates are compared by their IEEE total order, so
/// `NaN == NaN` and `0.0 != -0.0`. Tolerant comparison lives in
/// [`PointComparator`].
///
/// # Examples
///
/// ```rust
/// # use gallop_core::math::point::Point;
///
/// let p = Point::new(1.5, 2.0);
/// assert_eq!(p.x(), 1.5);
/// assert_eq!(format!("{}", p), "(1.500000, 2.000000)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new `Point`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the left edge.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Distance from the top edge.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.total_cmp(&other.x).is_eq() && self.y.total_cmp(&other.y).is_eq()
    }
}

impl Eq for Point {}

impl std::hash::Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// Row-major ordering of points with a tolerance per axis.
///
/// Points are ordered by `y` first, then by `x`. Each axis is compared with
/// the wrapped [`DeltaComparator`], so points whose `y` differ by at most the
/// delta lie on the same row.
///
/// # Examples
///
/// ```rust
/// # use gallop_core::cmp::Comparator;
/// # use gallop_core::math::point::{Point, PointComparator};
/// # use std::cmp::Ordering;
///
/// let cmp = PointComparator::default();
/// let a = Point::new(5.0, 1.0);
/// let b = Point::new(0.0, 2.0);
/// assert_eq!(cmp.compare(&a, &b), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointComparator {
    axis: DeltaComparator,
}

impl PointComparator {
    /// Creates a point comparator using `axis` for both coordinates.
    #[inline]
    pub const fn new(axis: DeltaComparator) -> Self {
        Self { axis }
    }

    /// The per-axis comparator.
    #[inline]
    pub const fn axis(&self) -> &DeltaComparator {
        &self.axis
    }
}

impl Comparator<Point> for PointComparator {
    #[inline]
    fn compare(&self, a: &Point, b: &Point) -> Ordering {
        self.axis
            .compare(&a.y, &b.y)
            .then_with(|| self.axis.compare(&a.x, &b.x))
    }
}
