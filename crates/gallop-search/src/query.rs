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

use crate::{
    error::{MissingArgumentError, SearchError},
    gallop::{Direction, gallop},
    range::find_matching_range,
    sequence::Sequence,
};
use gallop_core::{cmp::Comparator, math::interval::Interval};

/// A validating builder for boundary searches whose arguments arrive optionally.
///
/// The free functions take references and therefore can never be handed an
/// absent argument. Callers that assemble a search from optional parts (a
/// sequence that may not be loaded yet, a comparator chosen at runtime) use
/// this builder instead: every operation checks that its arguments are
/// present before a single comparison runs, and reports the first missing
/// one as [`SearchError::MissingArgument`].
///
/// # Examples
///
/// ```rust
/// use gallop_core::{cmp::NaturalOrder, math::interval::Interval};
/// use gallop_search::query::RangeQuery;
///
/// let values = vec![1, 2, 2, 3];
/// let query = RangeQuery::new()
///     .sequence(&values)
///     .comparator(&NaturalOrder)
///     .target(&2);
/// assert_eq!(query.find_range(), Ok(Some(Interval::closed(1, 2))));
///
/// let missing = RangeQuery::<Vec<i32>, NaturalOrder>::new().sequence(&values);
/// assert!(missing.find_range().is_err());
/// ```
pub struct RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: ?Sized,
{
    sequence: Option<&'a S>,
    comparator: Option<&'a C>,
    target: Option<&'a S::Item>,
}

impl<'a, S, C> RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    /// Creates a query with no arguments set.
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(None, None, None)
    }

    /// Creates a query from arguments that may each be absent.
    #[inline]
    pub fn from_parts(
        sequence: Option<&'a S>,
        comparator: Option<&'a C>,
        target: Option<&'a S::Item>,
    ) -> Self {
        Self {
            sequence,
            comparator,
            target,
        }
    }

    /// Sets the sequence to search.
    #[inline]
    pub fn sequence(mut self, sequence: &'a S) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Sets the comparator.
    #[inline]
    pub fn comparator(mut self, comparator: &'a C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Sets the element whose run is searched for.
    #[inline]
    pub fn target(mut self, target: &'a S::Item) -> Self {
        self.target = Some(target);
        self
    }

    #[inline]
    fn require<T: ?Sized>(
        part: Option<&'a T>,
        argument: &'static str,
    ) -> Result<&'a T, MissingArgumentError> {
        part.ok_or(MissingArgumentError { argument })
    }

    /// Runs [`find_matching_range`] with the configured arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingArgument`] naming the first of
    /// `sequence`, `comparator` or `target` that is absent.
    pub fn find_range(&self) -> Result<Option<Interval<usize>>, SearchError> {
        let sequence = Self::require(self.sequence, "sequence")?;
        let comparator = Self::require(self.comparator, "comparator")?;
        let target = Self::require(self.target, "target")?;
        Ok(find_matching_range(sequence, comparator, target))
    }

    /// Runs [`gallop`] from `index` with the configured sequence and comparator.
    ///
    /// The target is not needed and may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingArgument`] if the sequence or comparator
    /// is absent, and [`SearchError::OutOfBounds`] if `index` is not a valid
    /// position.
    pub fn gallop(&self, index: usize, direction: Direction) -> Result<usize, SearchError> {
        let sequence = Self::require(self.sequence, "sequence")?;
        let comparator = Self::require(self.comparator, "comparator")?;
        gallop(sequence, comparator, index, direction).map_err(SearchError::from)
    }
}

impl<'a, S, C> Default for RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, C> Clone for RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S, C> Copy for RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: ?Sized,
{
}

impl<'a, S, C> std::fmt::Debug for RangeQuery<'a, S, C>
where
    S: Sequence + ?Sized,
    C: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeQuery")
            .field("has_sequence", &self.sequence.is_some())
            .field("has_comparator", &self.comparator.is_some())
            .field("has_target", &self.target.is_some())
            .finish()
    }
}
