// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lower-bound binary search.
//!
//! On sorted input the result must be the partition point of `x < target`,
//! with `found` true exactly when that slot holds the target. On unsorted
//! input the answer is meaningless but must stay in bounds and never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicekit::{binary_search, binary_search_by};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    values: Vec<i16>,
    target: i16,
    presort: bool,
}

fuzz_target!(|input: SearchInput| {
    let mut values = input.values;
    if input.presort {
        values.sort_unstable();
    }

    let (index, found) = binary_search(&values, &input.target);
    assert!(index <= values.len(), "index {} past len {}", index, values.len());

    let by = binary_search_by(&values, &input.target, |e, t| e.cmp(t));
    assert_eq!(by, (index, found), "binary_search_by disagrees with binary_search");

    if input.presort {
        let expected = values.partition_point(|x| *x < input.target);
        assert_eq!(index, expected, "not the lower bound");
        assert_eq!(found, values.get(index) == Some(&input.target));
    }
});
