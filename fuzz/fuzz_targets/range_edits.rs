// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for range edits and their checked variants.
//!
//! Arbitrary ranges are thrown at `try_delete`, `try_insert` and
//! `try_replace`. Invalid ranges must be rejected with the vector untouched;
//! valid ones must match the same edit done with `Vec::splice`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicekit::verify::{try_delete, try_insert, try_replace};
use slicekit::{delete, insert, replace};

#[derive(Debug, Arbitrary)]
struct EditInput {
    values: Vec<u8>,
    start: u8,
    end: u8,
    fill: Vec<u8>,
}

fuzz_target!(|input: EditInput| {
    let original = input.values;
    let start = input.start as usize;
    let end = input.end as usize;
    let valid = start <= end && end <= original.len();

    let mut deleted = original.clone();
    match try_delete(&mut deleted, start, end) {
        Ok(()) => {
            assert!(valid);
            let mut expected = original.clone();
            expected.drain(start..end);
            assert_eq!(deleted, expected);

            let mut panicking = original.clone();
            delete(&mut panicking, start, end);
            assert_eq!(panicking, expected);
        }
        Err(_) => {
            assert!(!valid);
            assert_eq!(deleted, original, "failed delete mutated the vector");
        }
    }

    let mut replaced = original.clone();
    match try_replace(&mut replaced, start, end, input.fill.iter().copied()) {
        Ok(()) => {
            assert!(valid);
            let mut expected = original.clone();
            expected.splice(start..end, input.fill.iter().copied());
            assert_eq!(replaced, expected);

            let mut panicking = original.clone();
            replace(&mut panicking, start, end, input.fill.iter().copied());
            assert_eq!(panicking, expected);
        }
        Err(_) => {
            assert!(!valid);
            assert_eq!(replaced, original, "failed replace mutated the vector");
        }
    }

    let mut inserted = original.clone();
    match try_insert(&mut inserted, start, input.fill.iter().copied()) {
        Ok(()) => {
            assert!(start <= original.len());
            assert_eq!(inserted.len(), original.len() + input.fill.len());
            assert_eq!(&inserted[start..start + input.fill.len()], input.fill.as_slice());

            let mut panicking = original.clone();
            insert(&mut panicking, start, input.fill.iter().copied());
            assert_eq!(panicking, inserted);
        }
        Err(_) => {
            assert!(start > original.len());
            assert_eq!(inserted, original, "failed insert mutated the vector");
        }
    }
});
