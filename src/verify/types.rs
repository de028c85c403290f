// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type and wrapper types that make invalid states unrepresentable.
//!
//! The plain operations in this crate panic when a caller hands them a bad
//! range or an empty sequence. That is the right default for programmer
//! errors, but some callers compute indices from untrusted input. For them,
//! `SliceError` describes exactly what went wrong, and `SortedVec` carries its
//! ordering invariant in the type so binary search has no caller contract.
//!
//! # What's Guaranteed
//!
//! | Type           | Invariant                                  |
//! |----------------|--------------------------------------------|
//! | `SortedVec<T>` | `v[i] <= v[i + 1]` for every adjacent pair |
//!
//! # Example
//!
//! ```
//! use slicekit::verify::SortedVec;
//!
//! let mut primes = SortedVec::from_unsorted(vec![7, 2, 5, 3]);
//! primes.insert(11);
//! assert_eq!(primes.binary_search(&5), (2, true));
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type for precondition violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// Range start is past the range end (`start > end`).
    RangeStartAfterEnd { start: usize, end: usize },
    /// Range end is past the sequence length.
    RangeEndOutOfBounds { end: usize, len: usize },
    /// Insertion index is past the sequence length.
    IndexOutOfBounds { index: usize, len: usize },
    /// An extremum was requested from an empty sequence.
    EmptySequence,
    /// Sequence is not sorted; `position` is the first element smaller than its predecessor.
    Unsorted { position: usize },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::RangeStartAfterEnd { start, end } => {
                write!(f, "range start {} is after range end {}", start, end)
            }
            SliceError::RangeEndOutOfBounds { end, len } => {
                write!(f, "range end {} out of bounds for length {}", end, len)
            }
            SliceError::IndexOutOfBounds { index, len } => {
                write!(f, "insertion index {} out of bounds for length {}", index, len)
            }
            SliceError::EmptySequence => write!(f, "empty sequence has no extremum"),
            SliceError::Unsorted { position } => {
                write!(f, "sequence not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for SliceError {}

/// Validate a half-open range `[start, end)` against a length.
#[inline]
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), SliceError> {
    if start > end {
        return Err(SliceError::RangeStartAfterEnd { start, end });
    }
    if end > len {
        return Err(SliceError::RangeEndOutOfBounds { end, len });
    }
    Ok(())
}

/// Validate an insertion index (`index == len` appends).
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SliceError> {
    if index > len {
        return Err(SliceError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// A vector whose elements are always in ascending order.
///
/// # Invariants (enforced at construction and by every mutator)
/// - For all `i < j`: `v[i] <= v[j]`
///
/// Because the invariant is carried by the type, [`SortedVec::binary_search`]
/// always returns a meaningful answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<T>", into = "Vec<T>"))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: Ord + Clone + Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Ord + Deserialize<'de>"))
)]
pub struct SortedVec<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> SortedVec<T> {
    /// Create an empty sorted vector.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap a vector that is already sorted.
    ///
    /// Returns `Err(SliceError::Unsorted)` pointing at the first descent.
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, SliceError> {
        for i in 1..items.len() {
            if items[i - 1] > items[i] {
                return Err(SliceError::Unsorted { position: i });
            }
        }
        Ok(Self { items })
    }

    /// Sort a vector and wrap it.
    pub fn from_unsorted(mut items: Vec<T>) -> Self {
        crate::sort::sort(&mut items);
        Self { items }
    }

    /// Lower-bound search; see [`crate::binary_search`].
    pub fn binary_search(&self, target: &T) -> (usize, bool) {
        crate::search::binary_search(&self.items, target)
    }

    /// Check whether an equal element is present.
    pub fn contains(&self, target: &T) -> bool {
        self.binary_search(target).1
    }

    /// Insert `value` at its lower-bound position and return that position.
    ///
    /// Equal elements already present stay after the new one.
    pub fn insert(&mut self, value: T) -> usize {
        let (index, _) = self.binary_search(&value);
        self.items.insert(index, value);
        index
    }

    /// Remove the first element equal to `target`, if any.
    pub fn remove(&mut self, target: &T) -> Option<T> {
        match self.binary_search(target) {
            (index, true) => Some(self.items.remove(index)),
            _ => None,
        }
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Borrow the elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate over elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord> Default for SortedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> TryFrom<Vec<T>> for SortedVec<T> {
    type Error = SliceError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items)
    }
}

impl<T: Ord> From<SortedVec<T>> for Vec<T> {
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.items
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
