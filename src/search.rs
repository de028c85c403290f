// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted slices.
//!
//! Both searches find the **lower bound**: the first position whose element is
//! not less than the target. That position is the answer whether or not the
//! target is present.
//!
//! ```text
//! s = [1, 3, 5, 7, 9]
//!
//! target 5:  lo=0 hi=5 -> mid=2 (5 !< 5) hi=2 -> mid=1 (3 < 5) lo=2  => (2, true)
//! target 6:  lo=0 hi=5 -> mid=2 (5 < 6) lo=3 -> mid=4 (9 !< 6) hi=4
//!                      -> mid=3 (7 !< 6) hi=3                       => (3, false)
//! ```
//!
//! # Precondition
//!
//! The slice must be sorted by the same ordering the search uses. Unsorted
//! input is not detected: the result is some index in `0..=len`, never a panic.

use crate::verify::contracts::check_insertion_point;
use std::cmp::Ordering;

/// Search a sorted slice for `target`.
///
/// Returns `(index, found)`. When `found` is true, `index` is the first
/// position holding an element equal to `target`. Otherwise `index` is where
/// `target` would be inserted to keep the slice sorted.
///
/// O(log n) comparisons.
///
/// ```
/// let numbers = [1, 3, 5, 7, 9];
/// assert_eq!(slicekit::binary_search(&numbers, &5), (2, true));
/// assert_eq!(slicekit::binary_search(&numbers, &6), (3, false));
/// ```
pub fn binary_search<T: Ord>(s: &[T], target: &T) -> (usize, bool) {
    let mut lo = 0usize;
    let mut hi = s.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if s[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let found = lo < s.len() && s[lo] == *target;
    check_insertion_point(s, target, T::cmp, lo, found);
    (lo, found)
}

/// Search a slice sorted by a derived key.
///
/// `cmp(element, target)` returns how the element orders relative to the
/// target; the element and target types may differ, so a slice of records can
/// be searched by one field.
///
/// ```
/// let people = [("alice", 25), ("bob", 30), ("charlie", 35)];
/// assert_eq!(slicekit::binary_search_by(&people, &30, |p, age| p.1.cmp(age)), (1, true));
/// assert_eq!(slicekit::binary_search_by(&people, &40, |p, age| p.1.cmp(age)), (3, false));
/// ```
pub fn binary_search_by<E, T, F>(s: &[E], target: &T, mut cmp: F) -> (usize, bool)
where
    T: ?Sized,
    F: FnMut(&E, &T) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = s.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&s[mid], target) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let found = lo < s.len() && cmp(&s[lo], target) == Ordering::Equal;
    check_insertion_point(s, target, &mut cmp, lo, found);
    (lo, found)
}
