// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Adjacency-only deduplication.
//!
//! Runs of equal neighbours collapse to their first element. Duplicates that
//! are not adjacent survive: `[1, 2, 1]` stays `[1, 2, 1]`. Sort first if you
//! want global uniqueness.

use crate::verify::contracts::check_no_adjacent_duplicates;

/// Collapse runs of equal adjacent elements, keeping the first of each run.
///
/// One left-to-right pass; kept elements are swapped down and the tail is
/// truncated.
///
/// ```
/// let mut numbers = vec![1, 1, 2, 3, 3, 3, 4, 4, 5];
/// slicekit::compact(&mut numbers);
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
/// ```
pub fn compact<T: PartialEq>(v: &mut Vec<T>) {
    if v.len() < 2 {
        return;
    }
    let mut write = 1usize;
    for read in 1..v.len() {
        if v[read] != v[write - 1] {
            if read != write {
                v.swap(read, write);
            }
            write += 1;
        }
    }
    v.truncate(write);
    check_no_adjacent_duplicates(v.as_slice(), |a, b| a == b);
}

/// Drop every element for which `eq(current, previous)` holds, where
/// `previous` is its neighbour in the input.
///
/// Each pair of original neighbours is tested, so for an equivalence relation
/// this keeps the first of each run. A non-transitive relation can chain: with
/// `|a - b| <= 1`, `[1, 2, 3, 4]` collapses to `[1]`.
///
/// ```
/// let mut people = vec![("Alice", 25), ("Alice", 30), ("Bob", 30)];
/// slicekit::compact_by(&mut people, |a, b| a.0 == b.0);
/// assert_eq!(people, vec![("Alice", 25), ("Bob", 30)]);
/// ```
pub fn compact_by<T, F>(v: &mut Vec<T>, mut eq: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let mut write = 1usize;
    // Where the input predecessor of `v[read]` currently sits
    let mut previous = 0usize;
    for read in 1..v.len() {
        if eq(&v[read], &v[previous]) {
            previous = read;
            continue;
        }
        if read != write {
            v.swap(read, write);
        }
        previous = write;
        write += 1;
    }
    v.truncate(write);
}
