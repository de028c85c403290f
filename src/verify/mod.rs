// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked operations, type-level invariants and runtime contracts.
//!
//! Three complementary approaches to catching bugs:
//!
//! 1. **Checked operations** (`try_delete`, `try_min`, ...) that return a
//!    `SliceError` instead of panicking on a bad range or an empty input.
//!
//! 2. **Type-level wrappers** (`SortedVec`) that make invalid states
//!    unrepresentable. If it compiles, the ordering invariant holds.
//!
//! 3. **Runtime contracts** that panic in debug builds when a postcondition is
//!    violated. Zero-cost in release, but catch bugs during development.

mod checked;
pub mod contracts;
mod types;

pub use checked::*;
pub use types::{SliceError, SortedVec};

pub(crate) use types::{check_index, check_range};
