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

use gallop_core::{
    cmp::{Comparator, NaturalOrder, delta::DeltaComparator},
    math::interval::Interval,
};
use gallop_search::{
    gallop::{Direction, gallop},
    range::{count_matching, find_matching_range},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{cell::Cell, collections::VecDeque};

const SEED: u64 = 42;
const ROUNDS: usize = 200;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sorted vector of small integers, so runs of duplicates are common.
fn random_sorted(rng: &mut ChaCha8Rng, max_len: usize, max_value: i32) -> Vec<i32> {
    let len = rng.random_range(0..=max_len);
    let mut values: Vec<i32> = (0..len).map(|_| rng.random_range(0..=max_value)).collect();
    values.sort_unstable();
    values
}

/// Checks the run against a linear scan: every element inside matches, both neighbors do not.
fn assert_maximal_run<C>(values: &[i32], comparator: &C, target: i32, run: Interval<usize>)
where
    C: Comparator<i32>,
{
    let lo = run.lower_bound();
    let hi = run.upper_bound();
    assert!(lo <= hi && hi < values.len(), "run {} out of range", run);
    assert!(run.is_lower_inclusive() && run.is_upper_inclusive());
    for i in lo..=hi {
        assert!(
            comparator.matches(&values[i], &target),
            "index {} in {} does not match {}",
            i,
            run,
            target
        );
    }
    if lo > 0 {
        assert!(!comparator.matches(&values[lo - 1], &target));
    }
    if hi + 1 < values.len() {
        assert!(!comparator.matches(&values[hi + 1], &target));
    }
}

#[test]
fn test_concrete_scenario() {
    init_logging();
    let values = [1, 1, 1, 2, 2, 5, 5, 5, 5, 9];
    assert_eq!(
        find_matching_range(&values[..], &NaturalOrder, &2),
        Some(Interval::closed(3, 4))
    );
    assert_eq!(
        find_matching_range(&values[..], &NaturalOrder, &5),
        Some(Interval::closed(5, 8))
    );
    assert_eq!(
        find_matching_range(&values[..], &NaturalOrder, &9),
        Some(Interval::closed(9, 9))
    );
    assert_eq!(find_matching_range(&values[..], &NaturalOrder, &3), None);

    let empty: [i32; 0] = [];
    for target in [i32::MIN, 0, 3, i32::MAX] {
        assert_eq!(find_matching_range(&empty[..], &NaturalOrder, &target), None);
    }
}

#[test]
fn test_random_runs_are_maximal() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let values = random_sorted(&mut rng, 300, 20);
        for target in -1..=21 {
            match find_matching_range(&values[..], &NaturalOrder, &target) {
                Some(run) => {
                    assert_maximal_run(&values, &NaturalOrder, target, run);
                    let expected = values.iter().filter(|v| **v == target).count();
                    assert_eq!(run.len(), expected);
                }
                None => assert!(!values.contains(&target)),
            }
        }
    }
}

#[test]
fn test_random_coarse_equivalence() {
    init_logging();
    // Sorting by value is consistent with ordering by tens digit.
    let by_tens = |a: &i32, b: &i32| (a / 10).cmp(&(b / 10));
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 1);
    for _ in 0..ROUNDS {
        let values = random_sorted(&mut rng, 200, 99);
        for target in [0, 15, 42, 77, 99] {
            match find_matching_range(&values[..], &by_tens, &target) {
                Some(run) => assert_maximal_run(&values, &by_tens, target, run),
                None => assert!(values.iter().all(|v| v / 10 != target / 10)),
            }
        }
    }
}

#[test]
fn test_full_sequence_run() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 2);
    for _ in 0..ROUNDS {
        let len = rng.random_range(1..=500);
        let value = rng.random_range(-50..50);
        let values = vec![value; len];
        assert_eq!(
            find_matching_range(&values, &NaturalOrder, &value),
            Some(Interval::closed(0, len - 1))
        );
        assert_eq!(count_matching(&values, &NaturalOrder, &value), len);
    }
}

#[test]
fn test_gallop_agrees_with_linear_scan() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 3);
    for _ in 0..ROUNDS {
        let values = random_sorted(&mut rng, 100, 5);
        if values.is_empty() {
            continue;
        }
        let seed = rng.random_range(0..values.len());
        let expected_lo = (0..=seed)
            .rev()
            .take_while(|&i| values[i] == values[seed])
            .last()
            .unwrap_or(seed);
        let expected_hi = (seed..values.len())
            .take_while(|&i| values[i] == values[seed])
            .last()
            .unwrap_or(seed);

        assert_eq!(
            gallop(&values, &NaturalOrder, seed, Direction::TowardStart),
            Ok(expected_lo)
        );
        assert_eq!(
            gallop(&values, &NaturalOrder, seed, Direction::TowardEnd),
            Ok(expected_hi)
        );
    }
}

#[test]
fn test_deque_and_slice_agree() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 4);
    for _ in 0..ROUNDS {
        let values = random_sorted(&mut rng, 64, 10);
        let deque: VecDeque<i32> = values.iter().copied().collect();
        for target in 0..=10 {
            assert_eq!(
                find_matching_range(&deque, &NaturalOrder, &target),
                find_matching_range(&values[..], &NaturalOrder, &target)
            );
        }
    }
}

#[test]
fn test_comparator_calls_stay_logarithmic() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 5);
    for _ in 0..ROUNDS {
        let before = rng.random_range(0..50);
        let run = rng.random_range(1..20_000);
        let after = rng.random_range(0..50);

        let mut values = vec![0u32; before];
        values.extend(std::iter::repeat_n(1, run));
        values.extend(std::iter::repeat_n(2, after));

        let seed = before + rng.random_range(0..run);
        for direction in [Direction::TowardStart, Direction::TowardEnd] {
            let calls = Cell::new(0usize);
            let counting = |a: &u32, b: &u32| {
                calls.set(calls.get() + 1);
                a.cmp(b)
            };
            let boundary = gallop(&values, &counting, seed, direction).unwrap();
            let distance = boundary.abs_diff(seed);
            let log = distance.checked_ilog2().unwrap_or(0) as usize;
            assert!(
                calls.get() <= (log + 2) * (log + 2),
                "{} calls for distance {}",
                calls.get(),
                distance
            );
            // Far below a linear walk once runs get long.
            if distance >= 1024 {
                assert!(calls.get() * 8 < distance);
            }
        }
    }
}

#[test]
fn test_tolerant_float_runs() {
    init_logging();
    let cmp = DeltaComparator::new(0.01).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 6);
    for _ in 0..ROUNDS {
        // Clusters around integers, jitter well inside the tolerance band.
        let mut readings: Vec<f64> = (0..rng.random_range(1..200))
            .map(|_| f64::from(rng.random_range(0..10i32)) + rng.random_range(-0.004..0.004))
            .collect();
        readings.sort_by(f64::total_cmp);

        for center in 0..10i32 {
            let target = f64::from(center);
            let expected = readings
                .iter()
                .filter(|r| (**r - target).abs() <= 0.01)
                .count();
            let found = find_matching_range(&readings[..], &cmp, &target);
            assert_eq!(found.map_or(0, |run| run.len()), expected);
        }
    }
}
