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
    gallop::{Direction, gallop_from},
    sequence::Sequence,
};
use gallop_core::{cmp::Comparator, math::interval::Interval};

/// Finds the maximal run of elements matching `target`.
///
/// A binary search locates one matching element; gallop searches from it
/// toward both ends then widen the hit to the whole run. The result is the
/// closed index interval `[lo, hi]` such that every element in it matches
/// `target`, while the elements at `lo - 1` and `hi + 1` (where they exist)
/// do not.
///
/// Returns `None` if no element matches, including for an empty sequence.
/// The sequence must be sorted consistently with `comparator`.
///
/// # Examples
///
/// ```rust
/// use gallop_core::{cmp::NaturalOrder, math::interval::Interval};
/// use gallop_search::range::find_matching_range;
///
/// let values = [1, 1, 1, 2, 2, 5, 5, 5, 5, 9];
/// assert_eq!(find_matching_range(&values[..], &NaturalOrder, &5), Some(Interval::closed(5, 8)));
/// assert_eq!(find_matching_range(&values[..], &NaturalOrder, &3), None);
/// ```
pub fn find_matching_range<S, C>(
    sequence: &S,
    comparator: &C,
    target: &S::Item,
) -> Option<Interval<usize>>
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    let Ok(found) = sequence.binary_search_by(|probe| comparator.compare(probe, target)) else {
        log::debug!(
            "no element matches the target in a sequence of length {}",
            sequence.len()
        );
        return None;
    };

    // Widen against the target itself; with a non-transitive comparator the
    // found element's neighbors may match it but not the target.
    let lo = gallop_from(sequence, comparator, target, found, Direction::TowardStart);
    let hi = gallop_from(sequence, comparator, target, found, Direction::TowardEnd);

    let run = Interval::closed(lo, hi);
    log::debug!("matching run {} around index {}", run, found);
    Some(run)
}

/// Returns the number of elements matching `target`.
///
/// # Examples
///
/// ```rust
/// use gallop_core::cmp::NaturalOrder;
/// use gallop_search::range::count_matching;
///
/// let values = vec![1, 2, 2, 2, 3];
/// assert_eq!(count_matching(&values, &NaturalOrder, &2), 3);
/// assert_eq!(count_matching(&values, &NaturalOrder, &4), 0);
/// ```
#[inline]
pub fn count_matching<S, C>(sequence: &S, comparator: &C, target: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    find_matching_range(sequence, comparator, target).map_or(0, |run| run.len())
}

/// Returns the subslice of elements matching `target`, empty if there are none.
///
/// # Examples
///
/// ```rust
/// use gallop_core::cmp::delta::DeltaComparator;
/// use gallop_search::range::matching_slice;
///
/// let readings = [0.5, 0.99995, 1.0, 1.00003, 2.0];
/// let near_one = matching_slice(&readings, &DeltaComparator::default(), &1.0);
/// assert_eq!(near_one, &[0.99995, 1.0, 1.00003]);
/// ```
pub fn matching_slice<'a, T, C>(slice: &'a [T], comparator: &C, target: &T) -> &'a [T]
where
    C: Comparator<T> + ?Sized,
{
    find_matching_range(slice, comparator, target)
        .and_then(|run| run.to_range_inclusive())
        .and_then(|range| slice.get(range))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallop_core::{
        cmp::{NaturalOrder, delta::DeltaComparator},
        math::point::{Point, PointComparator},
    };
    use std::collections::VecDeque;

    const VALUES: [i32; 10] = [1, 1, 1, 2, 2, 5, 5, 5, 5, 9];

    fn find(target: i32) -> Option<Interval<usize>> {
        find_matching_range(&VALUES[..], &NaturalOrder, &target)
    }

    #[test]
    fn test_concrete_runs() {
        assert_eq!(find(1), Some(Interval::closed(0, 2)));
        assert_eq!(find(2), Some(Interval::closed(3, 4)));
        assert_eq!(find(5), Some(Interval::closed(5, 8)));
        assert_eq!(find(9), Some(Interval::closed(9, 9)));
    }

    #[test]
    fn test_absent_targets() {
        for target in [0, 3, 4, 6, 8, 10, i32::MIN, i32::MAX] {
            assert_eq!(find(target), None, "target {}", target);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(find_matching_range(&empty, &NaturalOrder, &0), None);
        assert_eq!(count_matching(&empty, &NaturalOrder, &0), 0);
    }

    #[test]
    fn test_result_is_closed_interval() {
        let run = find(2).unwrap();
        assert!(run.is_lower_inclusive());
        assert!(run.is_upper_inclusive());
        assert_eq!(run.lower_bound(), 3);
        assert_eq!(run.upper_bound(), 4);
        assert_eq!(format!("{}", run), "[3, 4]");
    }

    #[test]
    fn test_full_sequence_run() {
        let values = [7; 33];
        assert_eq!(
            find_matching_range(&values, &NaturalOrder, &7),
            Some(Interval::closed(0, 32))
        );
    }

    #[test]
    fn test_count_matching() {
        assert_eq!(count_matching(&VALUES[..], &NaturalOrder, &5), 4);
        assert_eq!(count_matching(&VALUES[..], &NaturalOrder, &9), 1);
        assert_eq!(count_matching(&VALUES[..], &NaturalOrder, &3), 0);
    }

    #[test]
    fn test_matching_slice() {
        assert_eq!(matching_slice(&VALUES, &NaturalOrder, &2), &[2, 2]);
        assert!(matching_slice(&VALUES, &NaturalOrder, &3).is_empty());
    }

    #[test]
    fn test_delta_equivalence_run() {
        let readings = [0.1, 0.2, 0.29995, 0.3, 0.30004, 0.4];
        let cmp = DeltaComparator::default();
        assert_eq!(
            find_matching_range(&readings[..], &cmp, &0.3),
            Some(Interval::closed(2, 4))
        );
        assert_eq!(find_matching_range(&readings[..], &cmp, &0.35), None);
    }

    #[test]
    fn test_delta_run_matches_target_not_found_element() {
        // The binary search lands on 0.8; 1.2 matches 0.8 but not the target 0.5,
        // while 0.0 matches the target but not 0.8.
        let values = [0.0, 0.4, 0.8, 1.2];
        let cmp = DeltaComparator::new(0.5).unwrap();
        let target = 0.5;
        let run = find_matching_range(&values[..], &cmp, &target).unwrap();
        assert_eq!(run, Interval::closed(0, 2));
        for i in run.iter() {
            assert!(cmp.matches(&values[i], &target), "index {} in {}", i, run);
        }
    }

    #[test]
    fn test_points_on_a_row() {
        // Sorted row-major; the second row has a little vertical jitter.
        let points: Vec<Point> = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 1.00004),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.99997),
            Point::new(2.0, 2.0),
        ];
        let cmp = PointComparator::default();
        let run = find_matching_range(&points, &cmp, &Point::new(0.0, 1.0));
        assert_eq!(run, Some(Interval::closed(2, 4)));
    }

    #[test]
    fn test_deque_sequence() {
        let deque: VecDeque<i32> = VALUES.iter().copied().collect();
        assert_eq!(
            find_matching_range(&deque, &NaturalOrder, &1),
            Some(Interval::closed(0, 2))
        );
    }
}
