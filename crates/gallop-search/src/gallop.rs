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

//! # Directional Gallop Search
//!
//! Given a sorted sequence and the index of an element, find how far the run
//! of elements matching it extends in one direction.
//!
//! ## Algorithm
//!
//! Starting from the seed, probe `1, 2, 4, 8, ...` elements past an anchor.
//! Every probe that lands on a match becomes the new anchor and doubles the
//! next step. When a probe misses (out of bounds, or not matching the seed)
//! after at least one successful step, the step collapses back to `1` and
//! doubling restarts from the current anchor. A miss on a unit step means the
//! anchor is the boundary.
//!
//! Probes are always compared against the seed element, never against the
//! moving anchor. For non-transitive equivalences such as a tolerance band
//! this keeps the reported run anchored to what the caller asked about. The
//! range finder goes one step further and compares against its target.
//!
//! ## Complexity
//!
//! For a boundary at distance `d`, each doubling pass costs `O(log d)`
//! comparator calls and the passes shrink the remaining window
//! geometrically. The total never exceeds `(⌊log2 d⌋ + 2)²` calls, and
//! out-of-bounds probes cost none.

use crate::{error::OutOfBoundsError, sequence::Sequence};
use gallop_core::cmp::Comparator;

/// The direction a gallop search walks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index `0`.
    TowardStart,
    /// Toward index `len - 1`.
    TowardEnd,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::TowardStart => Self::TowardEnd,
            Self::TowardEnd => Self::TowardStart,
        }
    }

    /// Moves `distance` elements from `anchor`, or `None` when that leaves `[0, len)`.
    #[inline(always)]
    fn step(self, anchor: usize, distance: usize, len: usize) -> Option<usize> {
        match self {
            Self::TowardStart => anchor.checked_sub(distance),
            Self::TowardEnd => anchor.checked_add(distance).filter(|&next| next < len),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TowardStart => write!(f, "TowardStart"),
            Self::TowardEnd => write!(f, "TowardEnd"),
        }
    }
}

/// Finds the farthest index in `direction` whose run from `index` matches `sequence[index]`.
///
/// Every element between `index` and the returned index (both inclusive)
/// matches the element at `index` under `comparator`. If the immediate
/// neighbor in `direction` does not match, or there is none, `index` itself
/// is returned.
///
/// # Errors
///
/// Returns an [`OutOfBoundsError`] if `index >= sequence.len()`, before the
/// comparator is ever called.
///
/// # Examples
///
/// ```rust
/// use gallop_core::cmp::NaturalOrder;
/// use gallop_search::gallop::{Direction, gallop};
///
/// let values = [1, 1, 1, 2, 2, 5, 5, 5, 5, 9];
/// assert_eq!(gallop(&values[..], &NaturalOrder, 6, Direction::TowardStart), Ok(5));
/// assert_eq!(gallop(&values[..], &NaturalOrder, 6, Direction::TowardEnd), Ok(8));
/// assert!(gallop(&values[..], &NaturalOrder, 10, Direction::TowardEnd).is_err());
/// ```
pub fn gallop<S, C>(
    sequence: &S,
    comparator: &C,
    index: usize,
    direction: Direction,
) -> Result<usize, OutOfBoundsError>
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    let seed = sequence.get(index).ok_or(OutOfBoundsError {
        index,
        len: sequence.len(),
    })?;
    Ok(gallop_from(sequence, comparator, seed, index, direction))
}

/// Gallop search measuring matches against an arbitrary reference element.
///
/// Every index in the returned run matches `reference`, which need not be
/// the element at `index`.
///
/// # Invariants
///
/// `reference` must match the element at `index`.
pub(crate) fn gallop_from<S, C>(
    sequence: &S,
    comparator: &C,
    reference: &S::Item,
    index: usize,
    direction: Direction,
) -> usize
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    let len = sequence.len();
    let mut anchor = index;
    let mut step_exponent: u32 = 0;

    loop {
        let hit = 1usize
            .checked_shl(step_exponent)
            .and_then(|distance| direction.step(anchor, distance, len))
            .filter(|&next| {
                sequence
                    .get(next)
                    .is_some_and(|candidate| comparator.matches(reference, candidate))
            });

        match hit {
            Some(next) => {
                anchor = next;
                step_exponent += 1;
            }
            None if step_exponent == 0 => {
                log::trace!(
                    "gallop {}: run from {} ends at {}",
                    direction,
                    index,
                    anchor
                );
                return anchor;
            }
            None => {
                log::trace!(
                    "gallop {}: step 2^{} missed, narrowing from anchor {}",
                    direction,
                    step_exponent,
                    anchor
                );
                step_exponent = 0;
            }
        }
    }
}
