// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the algorithmic operations.
//!
//! These are debug-mode assertions that verify the postconditions of the
//! sorts, the binary search and the adjacency dedup. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Can be switched off entirely by disabling the `contracts` feature
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Postcondition                                     |
//! |--------------------------------|---------------------------------------------------|
//! | `check_sorted_by`              | every adjacent pair is non-decreasing             |
//! | `check_insertion_point`        | the element before the index is `Less` than target|
//! | `check_permutation`            | stable sort position table visits each slot once  |
//! | `check_no_adjacent_duplicates` | no two neighbours compare equal after `compact`   |
//!
//! # Usage
//!
//! ```ignore
//! use slicekit::verify::contracts::*;
//!
//! // In debug builds, this panics if the slice is out of order
//! check_sorted_by(&items, |a, b| a.cmp(b));
//!
//! // In release builds, this is a no-op
//! ```

use std::cmp::Ordering;

/// Check that a slice is in non-decreasing order under `cmp`.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair compares `Greater`.
#[inline]
pub fn check_sorted_by<T, F>(s: &[T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if !cfg!(all(debug_assertions, feature = "contracts")) {
        return;
    }
    for i in 1..s.len() {
        debug_assert!(
            cmp(&s[i - 1], &s[i]) != Ordering::Greater,
            "Contract violation: Sorted - s[{}] > s[{}]",
            i - 1,
            i
        );
    }
}

/// Check a lower-bound binary search result using only local facts.
///
/// # Postcondition
/// - `index <= s.len()`
/// - the element just before `index` compares `Less` than the target
/// - `found` is true exactly when `s[index]` compares `Equal`
///
/// Every check touches at most two elements, so the search stays O(log n) in
/// debug builds. They hold for unsorted input too: the search only moves past
/// an element after seeing it compare `Less`.
///
/// # Panics (debug builds only)
/// Panics if any of the above fails.
#[inline]
pub fn check_insertion_point<E, T, F>(s: &[E], target: &T, mut cmp: F, index: usize, found: bool)
where
    T: ?Sized,
    F: FnMut(&E, &T) -> Ordering,
{
    if !cfg!(all(debug_assertions, feature = "contracts")) {
        return;
    }
    debug_assert!(
        index <= s.len(),
        "Contract violation: SearchBounds - index {} > len {}",
        index,
        s.len()
    );
    if index > 0 {
        debug_assert!(
            cmp(&s[index - 1], target) == Ordering::Less,
            "Contract violation: LowerBound - s[{}] is not less than target",
            index - 1
        );
    }
    let at_index = index < s.len() && cmp(&s[index], target) == Ordering::Equal;
    debug_assert_eq!(
        found, at_index,
        "Contract violation: FoundFlag - found = {} but s[{}] equal = {}",
        found, index, at_index
    );
}

/// Check that `order` is a permutation of `0..order.len()`.
///
/// # Panics (debug builds only)
/// Panics on a repeated or out-of-range position.
#[inline]
pub fn check_permutation(order: &[usize]) {
    if !cfg!(all(debug_assertions, feature = "contracts")) {
        return;
    }
    let mut seen = vec![false; order.len()];
    for (slot, &position) in order.iter().enumerate() {
        debug_assert!(
            position < order.len(),
            "Contract violation: Permutation - order[{}] = {} >= len {}",
            slot,
            position,
            order.len()
        );
        if position < order.len() {
            debug_assert!(
                !seen[position],
                "Contract violation: Permutation - position {} appears twice",
                position
            );
            seen[position] = true;
        }
    }
}

/// Check that no two neighbours are equal under `eq`.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent equal pair.
#[inline]
pub fn check_no_adjacent_duplicates<T, F>(s: &[T], mut eq: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if !cfg!(all(debug_assertions, feature = "contracts")) {
        return;
    }
    for i in 1..s.len() {
        debug_assert!(
            !eq(&s[i - 1], &s[i]),
            "Contract violation: Compacted - s[{}] equals s[{}]",
            i - 1,
            i
        );
    }
}
