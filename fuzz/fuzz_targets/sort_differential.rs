// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing the introsort against the standard library.
//!
//! Raw bytes are read as little-endian u16 keys so equal elements are common
//! and the partition sees long runs. The output must be exactly what
//! `sort_unstable` produces, for every length and distribution.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slicekit::{is_sorted, sort, sort_by};

fuzz_target!(|data: &[u8]| {
    let values: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    let mut expected = values.clone();
    expected.sort_unstable();

    let mut ours = values.clone();
    sort(&mut ours);
    assert!(is_sorted(&ours), "sort output not ordered");
    assert_eq!(ours, expected, "sort disagrees with sort_unstable");

    // Descending comparator must produce the mirror image.
    let mut descending = values;
    sort_by(&mut descending, |a, b| b.cmp(a));
    expected.reverse();
    assert_eq!(descending, expected, "sort_by(desc) disagrees with reversed std");
});
