// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for stable sorting.
//!
//! Keys are squeezed into a handful of buckets and tagged with their input
//! position. A stable sort must order by key and keep tags ascending within
//! each bucket, which is exactly what the standard stable sort does.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicekit::sort_stable_by;

#[derive(Debug, Arbitrary)]
struct StableInput {
    keys: Vec<u8>,
    buckets: u8,
}

fuzz_target!(|input: StableInput| {
    let buckets = input.buckets.max(1);
    let mut tagged: Vec<(u8, usize)> = input
        .keys
        .iter()
        .map(|k| k % buckets)
        .zip(0..)
        .collect();

    let mut expected = tagged.clone();
    expected.sort_by_key(|t| t.0);

    sort_stable_by(&mut tagged, |a, b| a.0.cmp(&b.0));
    assert_eq!(tagged, expected, "stable sort reordered equal keys");
});
