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

//! # Read-Only Random-Access Sequences
//!
//! The searches only ever ask a sequence for its length and for the element
//! at an index. `Sequence` captures exactly that, plus the binary search used
//! to seed a boundary search. Implementations backed by the standard library
//! delegate to its `binary_search_by`; other implementations inherit a plain
//! bisection.
//!
//! ## Preconditions
//!
//! A sequence handed to a search must be sorted consistently with the
//! comparator and must not change for the duration of the call. Neither is
//! checked: verifying sortedness costs a linear pass, which is exactly what
//! the searches exist to avoid.

use std::{cmp::Ordering, collections::VecDeque};

/// A fixed-size, index-addressable, read-only sequence.
///
/// # Examples
///
/// ```rust
/// use gallop_search::sequence::Sequence;
///
/// /// The first few squares `0, 1, 4, 9, ...`.
/// struct Squares(Vec<u64>);
///
/// impl Sequence for Squares {
///     type Item = u64;
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn get(&self, index: usize) -> Option<&u64> {
///         self.0.get(index)
///     }
/// }
///
/// let squares = Squares((0..10).map(|i| i * i).collect());
/// assert_eq!(Sequence::binary_search_by(&squares, |x| x.cmp(&49)), Ok(7));
/// assert_eq!(Sequence::binary_search_by(&squares, |x| x.cmp(&50)), Err(8));
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Binary searches the sequence with a probe function.
    ///
    /// `f` returns the ordering of a probed element relative to the target.
    /// Returns `Ok(index)` of *some* matching element (which one is
    /// unspecified when several match), or `Err(insertion_point)`.
    fn binary_search_by<F>(&self, mut f: F) -> Result<usize, usize>
    where
        F: FnMut(&Self::Item) -> Ordering,
    {
        let mut lo: usize = 0;
        let mut hi: usize = self.len();

        while lo < hi {
            let mid = lo + ((hi - lo) >> 1);
            let Some(probe) = self.get(mid) else {
                // `mid < len()`; a sequence that disagrees is treated as ending here.
                break;
            };
            match f(probe) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        <[T]>::binary_search_by(self, f)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.as_slice().binary_search_by(f)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.as_slice().binary_search_by(f)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        VecDeque::binary_search_by(self, f)
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&S::Item> {
        S::get(self, index)
    }

    #[inline]
    fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&S::Item) -> Ordering,
    {
        S::binary_search_by(self, f)
    }
}
