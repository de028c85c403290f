// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural equality, lexicographic comparison, sortedness and extrema.

use std::cmp::Ordering;

/// Same length and pairwise equal.
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}

/// Same length and `eq` holds for every positional pair.
///
/// The two slices may hold different element types.
///
/// ```
/// let names = ["Alice", "BOB"];
/// let lower = ["alice", "bob"];
/// assert!(slicekit::equal_by(&names, &lower, |a, b| a.eq_ignore_ascii_case(b)));
/// ```
pub fn equal_by<A, B, F>(a: &[A], b: &[B], mut eq: F) -> bool
where
    F: FnMut(&A, &B) -> bool,
{
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if !eq(&a[i], &b[i]) {
            return false;
        }
    }
    true
}

/// Lexicographic comparison.
///
/// The first unequal pair decides. If one slice is a prefix of the other, the
/// shorter one is `Less`.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(slicekit::compare(&[1, 2, 3], &[1, 2, 4]), Ordering::Less);
/// assert_eq!(slicekit::compare(&[1, 2], &[1, 2, 0]), Ordering::Less);
/// assert_eq!(slicekit::compare(&[2], &[1, 9, 9]), Ordering::Greater);
/// ```
pub fn compare<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    let common = a.len().min(b.len());
    for i in 0..common {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    a.len().cmp(&b.len())
}

/// Lexicographic comparison with a per-pair comparator.
pub fn compare_by<A, B, F>(a: &[A], b: &[B], mut cmp: F) -> Ordering
where
    F: FnMut(&A, &B) -> Ordering,
{
    let common = a.len().min(b.len());
    for i in 0..common {
        match cmp(&a[i], &b[i]) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    a.len().cmp(&b.len())
}

/// Every adjacent pair satisfies `s[i] <= s[i + 1]`.
pub fn is_sorted<T: Ord>(s: &[T]) -> bool {
    for i in 1..s.len() {
        if s[i - 1] > s[i] {
            return false;
        }
    }
    true
}

/// Every adjacent pair is non-decreasing under `cmp`.
pub fn is_sorted_by<T, F>(s: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..s.len() {
        if cmp(&s[i - 1], &s[i]) == Ordering::Greater {
            return false;
        }
    }
    true
}

/// Smallest element. Ties resolve to the first one.
///
/// # Panics
/// Panics if `s` is empty. Use [`crate::verify::try_min`] to get an error instead.
#[track_caller]
pub fn min<T: Ord>(s: &[T]) -> &T {
    let Some((first, rest)) = s.split_first() else {
        panic!("min: empty sequence has no extremum");
    };
    let mut best = first;
    for item in rest {
        if item < best {
            best = item;
        }
    }
    best
}

/// Largest element. Ties resolve to the first one.
///
/// # Panics
/// Panics if `s` is empty. Use [`crate::verify::try_max`] to get an error instead.
#[track_caller]
pub fn max<T: Ord>(s: &[T]) -> &T {
    let Some((first, rest)) = s.split_first() else {
        panic!("max: empty sequence has no extremum");
    };
    let mut best = first;
    for item in rest {
        if item > best {
            best = item;
        }
    }
    best
}

/// Smallest element under `cmp`. Ties resolve to the first one.
///
/// # Panics
/// Panics if `s` is empty.
///
/// ```
/// let people = [("Alice", 25), ("Bob", 30), ("Charlie", 35)];
/// let youngest = slicekit::min_by(&people, |a, b| a.1.cmp(&b.1));
/// assert_eq!(youngest.0, "Alice");
/// ```
#[track_caller]
pub fn min_by<T, F>(s: &[T], mut cmp: F) -> &T
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some((first, rest)) = s.split_first() else {
        panic!("min_by: empty sequence has no extremum");
    };
    let mut best = first;
    for item in rest {
        if cmp(item, best) == Ordering::Less {
            best = item;
        }
    }
    best
}

/// Largest element under `cmp`. Ties resolve to the first one.
///
/// # Panics
/// Panics if `s` is empty.
#[track_caller]
pub fn max_by<T, F>(s: &[T], mut cmp: F) -> &T
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some((first, rest)) = s.split_first() else {
        panic!("max_by: empty sequence has no extremum");
    };
    let mut best = first;
    for item in rest {
        if cmp(item, best) == Ordering::Greater {
            best = item;
        }
    }
    best
}
