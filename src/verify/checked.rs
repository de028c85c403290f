// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-panicking counterparts of the operations with preconditions.
//!
//! Each function validates first and mutates second, so an `Err` always
//! leaves the vector exactly as it was.

use super::types::{check_index, check_range, SliceError};
use std::cmp::Ordering;

/// Checked [`crate::delete`].
pub fn try_delete<T>(v: &mut Vec<T>, start: usize, end: usize) -> Result<(), SliceError> {
    check_range(start, end, v.len())?;
    v.drain(start..end);
    Ok(())
}

/// Checked [`crate::insert`].
pub fn try_insert<T, I>(v: &mut Vec<T>, index: usize, values: I) -> Result<(), SliceError>
where
    I: IntoIterator<Item = T>,
{
    check_index(index, v.len())?;
    v.splice(index..index, values);
    Ok(())
}

/// Checked [`crate::replace`].
pub fn try_replace<T, I>(
    v: &mut Vec<T>,
    start: usize,
    end: usize,
    values: I,
) -> Result<(), SliceError>
where
    I: IntoIterator<Item = T>,
{
    check_range(start, end, v.len())?;
    v.splice(start..end, values);
    Ok(())
}

/// Checked [`crate::min`]: `Err(SliceError::EmptySequence)` instead of a panic.
pub fn try_min<T: Ord>(s: &[T]) -> Result<&T, SliceError> {
    try_min_by(s, T::cmp)
}

/// Checked [`crate::max`].
pub fn try_max<T: Ord>(s: &[T]) -> Result<&T, SliceError> {
    try_max_by(s, T::cmp)
}

/// Checked [`crate::min_by`]. Ties resolve to the first minimal element.
pub fn try_min_by<T, F>(s: &[T], mut cmp: F) -> Result<&T, SliceError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = s.split_first().ok_or(SliceError::EmptySequence)?;
    let mut best = first;
    for item in rest {
        if cmp(item, best) == Ordering::Less {
            best = item;
        }
    }
    Ok(best)
}

/// Checked [`crate::max_by`]. Ties resolve to the first maximal element.
pub fn try_max_by<T, F>(s: &[T], mut cmp: F) -> Result<&T, SliceError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = s.split_first().ok_or(SliceError::EmptySequence)?;
    let mut best = first;
    for item in rest {
        if cmp(item, best) == Ordering::Greater {
            best = item;
        }
    }
    Ok(best)
}
