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

//! # Three-Way Comparators
//!
//! The ordering abstraction every search in the workspace is parameterized
//! over. A comparator answers `Less`, `Equal` or `Greater` for a pair of
//! elements; two elements *match* when it answers `Equal`. Matching need not
//! coincide with `==`: [`delta::DeltaComparator`] treats nearby floats as
//! equal, which is exactly the kind of coarse equivalence the boundary search
//! is built to expand.
//!
//! ## Highlights
//!
//! - `Comparator<T>` is implemented for every `Fn(&T, &T) -> Ordering`, so
//!   plain closures work anywhere a comparator is expected.
//! - `NaturalOrder` lifts any `Ord` type into a comparator.
//! - `delta`: tolerance-based comparison of `f64` values.
//!
//! ## Usage
//!
//! ```rust
//! use gallop_core::cmp::{Comparator, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert!(by_len.matches(&"abc", &"xyz"));
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! ```

use std::cmp::Ordering;

pub mod delta;

/// A three-way comparison over elements of type `T`.
///
/// Implementations must describe a total order consistent with how the
/// sequences they are used on are sorted. This is a precondition, not
/// something the searches verify.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` and `b` are equivalent under this comparator.
    #[inline]
    fn matches(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The comparator induced by `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl std::fmt::Display for NaturalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NaturalOrder")
    }
}
