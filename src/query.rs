// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear scans: find, membership, position.
//!
//! All scans run left-to-right and stop at the first match. A miss is an
//! ordinary result (`None` / `false`), never a panic.

/// First element matching `predicate`.
///
/// ```
/// assert_eq!(slicekit::find(&[1, 2, 3, 4, 5], |&x| x > 3), Some(&4));
/// assert_eq!(slicekit::find(&[1, 2, 3], |&x| x > 10), None);
/// ```
pub fn find<T, F>(s: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    for item in s {
        if predicate(item) {
            return Some(item);
        }
    }
    None
}

/// First element matching `predicate` plus a found flag.
///
/// On a miss returns `(T::default(), false)`.
///
/// ```
/// assert_eq!(slicekit::find_or_default(&[1, 2, 3], |&x| x > 10), (0, false));
/// ```
pub fn find_or_default<T, F>(s: &[T], mut predicate: F) -> (T, bool)
where
    T: Clone + Default,
    F: FnMut(&T) -> bool,
{
    for item in s {
        if predicate(item) {
            return (item.clone(), true);
        }
    }
    (T::default(), false)
}

/// True if any element matches. False for an empty slice.
pub fn some<T, F>(s: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in s {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// True if every element matches. True for an empty slice.
pub fn every<T, F>(s: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in s {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// True if an element equal to `value` is present.
pub fn contains<T: PartialEq>(s: &[T], value: &T) -> bool {
    for item in s {
        if item == value {
            return true;
        }
    }
    false
}

/// True if any element matches `predicate`.
pub fn contains_by<T, F>(s: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in s {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Position of the first element equal to `value`.
///
/// ```
/// assert_eq!(slicekit::index(&[1, 2, 3, 2, 4], &2), Some(1));
/// assert_eq!(slicekit::index(&[1, 2, 3], &9), None);
/// ```
pub fn index<T: PartialEq>(s: &[T], value: &T) -> Option<usize> {
    for (i, item) in s.iter().enumerate() {
        if item == value {
            return Some(i);
        }
    }
    None
}

/// Position of the first element matching `predicate`.
pub fn index_by<T, F>(s: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, item) in s.iter().enumerate() {
        if predicate(item) {
            return Some(i);
        }
    }
    None
}
