// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for slicekit's index arithmetic.
//!
//! This standalone crate extracts the lower-bound binary search, in-place
//! reverse and range validation, and proves their correctness using Kani
//! over every input up to a small bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Bounds**: binary_search returns an index in `0..=len` and never
//!    indexes out of bounds
//! 2. **Lower bound**: every element before the index is `< target`, every
//!    element from it on is `>= target`, on sorted input
//! 3. **Involution**: reverse(reverse(s)) == s
//! 4. **Range validation**: check_range accepts exactly `start <= end <= len`

/// Largest slice length explored by the proofs.
pub const MAX_LEN: usize = 6;

// ============================================================================
// PRIMITIVES (copied from src/search.rs, src/edit.rs, src/verify/types.rs)
// ============================================================================

/// Lower-bound binary search: `(first index with s[i] >= target, found)`.
pub fn binary_search(s: &[u8], target: u8) -> (usize, bool) {
    let mut lo = 0usize;
    let mut hi = s.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if s[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let found = lo < s.len() && s[lo] == target;
    (lo, found)
}

/// Reverse in place by swapping from both ends.
pub fn reverse(s: &mut [u8]) {
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

/// Why a range was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    StartAfterEnd,
    EndOutOfBounds,
}

/// Validate a half-open range `[start, end)` against a length.
pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), RangeError> {
    if start > end {
        return Err(RangeError::StartAfterEnd);
    }
    if end > len {
        return Err(RangeError::EndOutOfBounds);
    }
    Ok(())
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify binary_search stays in bounds for any slice, sorted or not.
    #[kani::proof]
    #[kani::unwind(8)] // MAX_LEN + 2
    fn verify_binary_search_in_bounds() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0u8; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
        }
        let target: u8 = kani::any();

        let (index, found) = binary_search(&buf[..len], target);
        kani::assert(index <= len, "index must be within 0..=len");
        if found {
            kani::assert(index < len, "found implies index < len");
            kani::assert(buf[index] == target, "found implies element equals target");
        }
    }

    /// Verify binary_search returns the lower bound on sorted input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_binary_search_lower_bound() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0u8; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
        }
        for i in 1..len {
            kani::assume(buf[i - 1] <= buf[i]);
        }
        let target: u8 = kani::any();

        let (index, found) = binary_search(&buf[..len], target);
        for i in 0..len {
            if i < index {
                kani::assert(buf[i] < target, "elements before index must be < target");
            } else {
                kani::assert(buf[i] >= target, "elements from index on must be >= target");
            }
        }
        let present = buf[..len].contains(&target);
        kani::assert(found == present, "found must match membership");
    }

    /// Verify reverse is an involution and really reverses.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_reverse_involution() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0u8; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
        }
        let original = buf;

        reverse(&mut buf[..len]);
        for i in 0..len {
            kani::assert(buf[i] == original[len - 1 - i], "reverse must mirror positions");
        }

        reverse(&mut buf[..len]);
        kani::assert(buf == original, "reverse twice must restore the slice");
    }

    /// Verify check_range accepts exactly the valid ranges.
    #[kani::proof]
    fn verify_check_range_exact() {
        let start: usize = kani::any();
        let end: usize = kani::any();
        let len: usize = kani::any();

        let result = check_range(start, end, len);
        kani::assert(
            result.is_ok() == (start <= end && end <= len),
            "check_range must accept exactly start <= end <= len",
        );
        if start > end {
            kani::assert(
                matches!(result, Err(RangeError::StartAfterEnd)),
                "inverted range must report StartAfterEnd first",
            );
        }
    }
}
