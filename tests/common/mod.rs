//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use std::cmp::Ordering;
use std::fmt::Debug;

// Re-export canonical test utilities from slicekit::testing
pub use slicekit::testing::{by_age, make_person, people_by_age, scrambled, Person};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `s` is non-decreasing under `cmp`, reporting the first descent.
pub fn assert_sorted_by<T, F>(s: &[T], mut cmp: F)
where
    T: Debug,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..s.len() {
        assert_ne!(
            cmp(&s[i - 1], &s[i]),
            Ordering::Greater,
            "not sorted at {}: {:?} > {:?}",
            i,
            s[i - 1],
            s[i]
        );
    }
}

/// Sort a copy with the standard library's stable sort.
pub fn std_stable_sorted<T: Clone, F>(s: &[T], cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut copy = s.to_vec();
    copy.sort_by(cmp);
    copy
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short lowercase names; few enough that ties are common.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ann", "bo", "cy", "di", "ed"]).prop_map(str::to_string)
}

/// People with narrow age range so equal keys show up often.
/// `order_id` records the input position.
pub fn people_strategy() -> impl Strategy<Value = Vec<Person>> {
    prop::collection::vec((name_strategy(), 18u32..24), 0..80).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(order_id, (name, age))| make_person(&name, age, order_id))
            .collect()
    })
}

/// Integer vectors mixing small and medium lengths.
pub fn int_vec_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop_oneof![
        4 => prop::collection::vec(-20i64..20, 0..32),
        1 => prop::collection::vec(any::<i64>(), 32..400),
    ]
}
