// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place comparison sorts.
//!
//! # Algorithm Overview
//!
//! ```text
//! sort / sort_by (unstable): introsort
//!   len <= 16           -> insertion sort
//!   depth limit reached -> heapsort            (caps worst case at O(n log n))
//!   otherwise           -> median-of-three pivot, Hoare partition,
//!                          recurse on the smaller side, loop on the larger
//!
//! sort_stable_by: merge sort over positions
//!   order = [0, 1, .., n-1]
//!   insertion-sort runs of 16 positions, then merge runs bottom-up
//!   (a right element only moves ahead of a left one when strictly Less)
//!   apply order to the slice by following permutation cycles with swaps
//! ```
//!
//! Everything moves elements with `swap`, so no sort needs `T: Clone` and the
//! crate stays free of `unsafe`.
//!
//! # Complexity
//!
//! - Time: O(n log n) worst case for all three
//! - Space: O(log n) stack for introsort; O(n) positions for the stable sort

use crate::verify::contracts::{check_permutation, check_sorted_by};
use std::cmp::Ordering;

/// Slices at or below this length are insertion sorted.
const INSERTION_THRESHOLD: usize = 16;

/// Sort ascending. Not stable.
///
/// ```
/// let mut numbers = [3, 1, 4, 1, 5, 9];
/// slicekit::sort(&mut numbers);
/// assert_eq!(numbers, [1, 1, 3, 4, 5, 9]);
/// ```
pub fn sort<T: Ord>(s: &mut [T]) {
    let limit = depth_limit(s.len());
    introsort(s, &mut T::cmp, limit);
    check_sorted_by(s, T::cmp);
}

/// Sort ascending under `cmp`. Not stable.
///
/// ```
/// let mut names = ["Charlie", "alice", "Bob"];
/// slicekit::sort_by(&mut names, |a, b| a.to_lowercase().cmp(&b.to_lowercase()));
/// assert_eq!(names, ["alice", "Bob", "Charlie"]);
/// ```
pub fn sort_by<T, F>(s: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let limit = depth_limit(s.len());
    introsort(s, &mut cmp, limit);
    check_sorted_by(s, &mut cmp);
}

/// Sort ascending under `cmp`, keeping equal elements in their input order.
///
/// ```
/// let mut people = [("Carol", 35), ("Alice", 25), ("Bob", 25)];
/// slicekit::sort_stable_by(&mut people, |a, b| a.1.cmp(&b.1));
/// assert_eq!(people, [("Alice", 25), ("Bob", 25), ("Carol", 35)]);
/// ```
pub fn sort_stable_by<T, F>(s: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = s.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    sort_positions(s, &mut order, &mut cmp);
    check_permutation(&order);

    apply_permutation(s, order);
    check_sorted_by(s, &mut cmp);
}

/// Twice the floor of log2(len), the classic introsort recursion budget.
#[inline]
fn depth_limit(len: usize) -> usize {
    2 * (usize::BITS - len.leading_zeros()) as usize
}

fn introsort<T, F>(mut s: &mut [T], cmp: &mut F, mut limit: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if s.len() <= INSERTION_THRESHOLD {
            insertion_sort(s, cmp);
            return;
        }
        if limit == 0 {
            heapsort(s, cmp);
            return;
        }
        limit -= 1;

        let pivot = partition(s, cmp);
        let (left, right) = std::mem::take(&mut s).split_at_mut(pivot);
        let right = &mut right[1..];

        // Recurse into the smaller half so the stack stays O(log n)
        if left.len() < right.len() {
            introsort(left, cmp, limit);
            s = right;
        } else {
            introsort(right, cmp, limit);
            s = left;
        }
    }
}

fn insertion_sort<T, F>(s: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..s.len() {
        let mut j = i;
        while j > 0 && cmp(&s[j], &s[j - 1]) == Ordering::Less {
            s.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Partition around a median-of-three pivot and return the pivot's final
/// position. Afterwards `s[..p] <= s[p] <= s[p + 1..]`.
///
/// Requires `s.len() >= 3`.
fn partition<T, F>(s: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = s.len();
    let mid = len / 2;

    // Order s[0] <= s[mid] <= s[len - 1]
    if cmp(&s[mid], &s[0]) == Ordering::Less {
        s.swap(mid, 0);
    }
    if cmp(&s[len - 1], &s[mid]) == Ordering::Less {
        s.swap(len - 1, mid);
        if cmp(&s[mid], &s[0]) == Ordering::Less {
            s.swap(mid, 0);
        }
    }
    s.swap(0, mid);

    // Hoare scan: s[1..i] <= pivot, s[j + 1..] >= pivot
    let mut i = 1usize;
    let mut j = len - 1;
    loop {
        while i <= j && cmp(&s[i], &s[0]) == Ordering::Less {
            i += 1;
        }
        while i <= j && cmp(&s[j], &s[0]) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            break;
        }
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
    s.swap(0, j);
    j
}

fn heapsort<T, F>(s: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = s.len();
    for start in (0..len / 2).rev() {
        sift_down(s, start, len, cmp);
    }
    for end in (1..len).rev() {
        s.swap(0, end);
        sift_down(s, 0, end, cmp);
    }
}

fn sift_down<T, F>(s: &mut [T], mut node: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && cmp(&s[child], &s[child + 1]) == Ordering::Less {
            child += 1;
        }
        if cmp(&s[node], &s[child]) != Ordering::Less {
            return;
        }
        s.swap(node, child);
        node = child;
    }
}

/// Stable bottom-up merge sort of `order`, comparing `s[order[k]]`.
fn sort_positions<T, F>(s: &[T], order: &mut Vec<usize>, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = order.len();

    for run in order.chunks_mut(INSERTION_THRESHOLD) {
        for i in 1..run.len() {
            let mut j = i;
            while j > 0 && cmp(&s[run[j]], &s[run[j - 1]]) == Ordering::Less {
                run.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    let mut buffer = vec![0usize; len];
    let mut width = INSERTION_THRESHOLD;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                s,
                &order[start..mid],
                &order[mid..end],
                &mut buffer[start..end],
                cmp,
            );
            start = end;
        }
        std::mem::swap(order, &mut buffer);
        width *= 2;
    }
}

fn merge_runs<T, F>(s: &[T], left: &[usize], right: &[usize], out: &mut [usize], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j, mut k) = (0usize, 0usize, 0usize);
    while i < left.len() && j < right.len() {
        // Ties go to the left run
        if cmp(&s[right[j]], &s[left[i]]) == Ordering::Less {
            out[k] = right[j];
            j += 1;
        } else {
            out[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    let rest_left = left.len() - i;
    out[k..k + rest_left].copy_from_slice(&left[i..]);
    out[k + rest_left..].copy_from_slice(&right[j..]);
}

/// Rearrange `s` so that `s[k]` becomes the old `s[order[k]]`.
fn apply_permutation<T>(s: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = current;
            if source == start {
                break;
            }
            s.swap(current, source);
            current = source;
        }
    }
}
