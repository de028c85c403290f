// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place edits: range deletion, insertion, replacement, reversal and
//! capacity management.
//!
//! Range arguments are half-open, `[start, end)`, and must satisfy
//! `start <= end <= len`. A bad range is a programmer error and panics,
//! but only after validation and before anything moves, so the vector is
//! never left half-edited. See [`crate::verify`] for non-panicking variants.

use crate::verify::{check_index, check_range, SliceError};

/// Panic with the operation name and the precondition that failed.
#[track_caller]
#[inline]
fn require(op: &str, check: Result<(), SliceError>) {
    if let Err(err) = check {
        panic!("{}: {}", op, err);
    }
}

/// Remove `v[start..end]`, shifting the tail left.
///
/// # Panics
/// Panics if `start > end` or `end > v.len()`.
///
/// ```
/// let mut numbers = vec![1, 2, 3, 4, 5];
/// slicekit::delete(&mut numbers, 1, 3);
/// assert_eq!(numbers, vec![1, 4, 5]);
/// ```
#[track_caller]
pub fn delete<T>(v: &mut Vec<T>, start: usize, end: usize) {
    require("delete", check_range(start, end, v.len()));
    v.drain(start..end);
}

/// Remove every element matching `predicate`, keeping survivors in order.
///
/// Single pass over the backing storage: survivors are swapped down into
/// place and the tail is truncated.
pub fn delete_by<T, F>(v: &mut Vec<T>, mut predicate: F)
where
    F: FnMut(&T) -> bool,
{
    let mut write = 0usize;
    for read in 0..v.len() {
        if !predicate(&v[read]) {
            if read != write {
                v.swap(read, write);
            }
            write += 1;
        }
    }
    v.truncate(write);
}

/// Insert `values` at `index`, shifting the tail right.
///
/// `index == v.len()` appends.
///
/// # Panics
/// Panics if `index > v.len()`.
///
/// ```
/// let mut numbers = vec![1, 2, 5];
/// slicekit::insert(&mut numbers, 2, [3, 4]);
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
/// ```
#[track_caller]
pub fn insert<T, I>(v: &mut Vec<T>, index: usize, values: I)
where
    I: IntoIterator<Item = T>,
{
    require("insert", check_index(index, v.len()));
    v.splice(index..index, values);
}

/// Replace `v[start..end]` with `values`.
///
/// The length changes by `values.len() - (end - start)`.
///
/// # Panics
/// Panics if `start > end` or `end > v.len()`.
///
/// ```
/// let mut numbers = vec![1, 2, 3, 4, 5];
/// slicekit::replace(&mut numbers, 1, 4, [6, 7]);
/// assert_eq!(numbers, vec![1, 6, 7, 5]);
/// ```
#[track_caller]
pub fn replace<T, I>(v: &mut Vec<T>, start: usize, end: usize, values: I)
where
    I: IntoIterator<Item = T>,
{
    require("replace", check_range(start, end, v.len()));
    v.splice(start..end, values);
}

/// Reverse in place by swapping from both ends toward the centre.
pub fn reverse<T>(s: &mut [T]) {
    if s.is_empty() {
        return;
    }
    let mut i = 0usize;
    let mut j = s.len() - 1;
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Ensure room for at least `additional` more elements without reallocating.
///
/// Length and contents are unchanged.
pub fn grow<T>(v: &mut Vec<T>, additional: usize) {
    v.reserve(additional);
}

/// Release unused capacity so it matches the length as closely as the
/// allocator allows.
pub fn clip<T>(v: &mut Vec<T>) {
    v.shrink_to_fit();
}

/// Independent copy with the same length and equal elements.
///
/// Elements are copied with `T::clone`; anything they point to is shared, not
/// duplicated.
pub fn clone<T: Clone>(s: &[T]) -> Vec<T> {
    let mut copy = Vec::with_capacity(s.len());
    copy.extend_from_slice(s);
    copy
}
