// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transformations that build a new sequence from an input one.
//!
//! Every function here is pure: the input is borrowed, never modified, and the
//! result is freshly allocated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positional pair produced by [`zip`] and consumed by [`unzip`].
///
/// Both halves are statically typed, so unzipping can never hit a
/// mismatched element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Build a pair from its two halves.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Split into a tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

/// Apply `f` to every element, in order.
///
/// The result always has the same length as the input.
///
/// ```
/// let lengths = slicekit::map(&["alice", "bob", "charlie"], |s| s.len());
/// assert_eq!(lengths, vec![5, 3, 7]);
/// ```
pub fn map<T, R, F>(s: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    let mut result = Vec::with_capacity(s.len());
    for item in s {
        result.push(f(item));
    }
    result
}

/// Keep the elements matching `predicate`, in their original order.
///
/// No match (or an empty input) yields an empty vector.
///
/// ```
/// let evens = slicekit::filter(&[1, 2, 3, 4, 5], |x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, F>(s: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for item in s {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Left fold: `f(...f(f(initial, s[0]), s[1])..., s[n-1])`.
///
/// ```
/// let sentence = slicekit::reduce(&["hello", " ", "world"], |acc, s| acc + *s, String::new());
/// assert_eq!(sentence, "hello world");
/// ```
pub fn reduce<T, R, F>(s: &[T], mut f: F, initial: R) -> R
where
    F: FnMut(R, &T) -> R,
{
    let mut acc = initial;
    for item in s {
        acc = f(acc, item);
    }
    acc
}

/// Concatenate inner sequences in order.
///
/// ```
/// let flat = slicekit::flatten(&[vec![1, 2], vec![], vec![3]]);
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn flatten<T, S>(nested: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = nested.iter().map(|inner| inner.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for inner in nested {
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Pair up elements by position. The longer input's tail is dropped.
///
/// ```
/// use slicekit::Pair;
///
/// let pairs = slicekit::zip(&[1, 2, 3], &['a', 'b']);
/// assert_eq!(pairs, vec![Pair::new(1, 'a'), Pair::new(2, 'b')]);
/// ```
pub fn zip<A, B>(a: &[A], b: &[B]) -> Vec<Pair<A, B>>
where
    A: Clone,
    B: Clone,
{
    let len = a.len().min(b.len());
    let mut result = Vec::with_capacity(len);
    for i in 0..len {
        result.push(Pair::new(a[i].clone(), b[i].clone()));
    }
    result
}

/// Split pairs into two sequences of equal length.
pub fn unzip<A, B>(pairs: Vec<Pair<A, B>>) -> (Vec<A>, Vec<B>) {
    let mut firsts = Vec::with_capacity(pairs.len());
    let mut seconds = Vec::with_capacity(pairs.len());
    for pair in pairs {
        firsts.push(pair.first);
        seconds.push(pair.second);
    }
    (firsts, seconds)
}
