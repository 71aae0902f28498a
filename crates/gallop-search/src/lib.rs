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

//! # Gallop Search
//!
//! **Galloping boundary search over sorted random-access sequences.**
//!
//! Given a sorted sequence and a comparator, find the full contiguous run of
//! elements equivalent to a target without a linear scan and without a second
//! binary search per boundary.
//!
//! Each doubling pass of the gallop costs `O(log d)` comparisons for a
//! boundary at distance `d`. Because a missed step restarts doubling from the
//! last anchor, the passes add up to `O(log² d)` in the worst case, at most
//! `(⌊log2 d⌋ + 2)²` calls per direction.
//!
//! ## Architecture
//!
//! Data flows one way: `range` seeds with the sequence's binary search, then
//! widens the hit with two `gallop` calls into a closed `Interval`.
//!
//! * **`sequence`**: The read-only `Sequence` abstraction (`len`, `get`) and
//!   its binary-search seeding primitive, implemented for slices, arrays,
//!   `Vec` and `VecDeque`.
//! * **`gallop`**: Directional Gallop Search, walking toward either end of a
//!   sequence with exponentially growing steps.
//! * **`range`**: The Range Finder, `find_matching_range`, plus the
//!   `count_matching` and `matching_slice` conveniences.
//! * **`query`**: `RangeQuery`, a builder that validates optional arguments
//!   before searching.
//! * **`error`**: `SearchError` and its detail types.
//!
//! ## Design Philosophy
//!
//! 1.  **Stateless**: Every search is a pure, synchronous function of borrowed
//!     inputs. Concurrent searches over an unchanging sequence are safe.
//! 2.  **No Match Is Not An Error**: A target with no equivalent element yields
//!     `None`; errors are reserved for invalid arguments.
//! 3.  **Comparator-Defined Equivalence**: Elements match when the comparator
//!     says `Equal`, which may be far coarser than `==`.

pub mod error;
pub mod gallop;
pub mod query;
pub mod range;
pub mod sequence;
