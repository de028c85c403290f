// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic slice utilities: map, filter, search, sort, compact and friends.
//!
//! Every operation is a free function over a borrowed slice or vector. There is
//! no hidden state: read-only operations borrow `&[T]`, in-place operations
//! borrow `&mut [T]` or `&mut Vec<T>`, and anything that builds a new sequence
//! returns a fresh `Vec`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │ transform.rs │ │   query.rs   │ │  search.rs   │ │   edit.rs    │
//! │ map, filter, │ │ find, some,  │ │ binary_search│ │ delete,      │
//! │ reduce, zip  │ │ index        │ │ (lower bound)│ │ insert, clip │
//! └──────────────┘ └──────────────┘ └──────┬───────┘ └──────┬───────┘
//! ┌──────────────┐ ┌──────────────┐        │                │
//! │   order.rs   │ │   sort.rs    │        │                │
//! │ compare, min,│ │ introsort,   │        │                │
//! │ is_sorted    │ │ stable merge │        │                │
//! └──────────────┘ └──────┬───────┘        │                │
//! ┌──────────────┐        │                │                │
//! │   dedup.rs   │        │                │                │
//! │ compact      │        │                │                │
//! └──────┬───────┘        ▼                ▼                ▼
//! ┌──────┴──────────────────────────────────────────────────────────┐
//! │                            verify/                              │
//! │  contracts (debug postconditions), SliceError, try_* variants,  │
//! │  SortedVec (ordering carried in the type)                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Failure Policy
//!
//! | Situation                                 | Result                        |
//! |-------------------------------------------|-------------------------------|
//! | Nothing found (`find`, `index`, ...)      | `None` / `false`              |
//! | Target absent from `binary_search`        | `(insertion_point, false)`    |
//! | Bad range to `delete`/`insert`/`replace`  | panic, vector untouched       |
//! | Empty input to `min`/`max`/`*_by`         | panic                         |
//! | Same, via `verify::try_*`                 | `Err(SliceError)`             |
//!
//! # Usage
//!
//! ```
//! use slicekit::{binary_search, compact, filter, map, sort};
//!
//! let mut readings = vec![5, 3, 3, 9, 1, 3];
//! sort(&mut readings);
//! compact(&mut readings);
//! assert_eq!(readings, vec![1, 3, 5, 9]);
//!
//! assert_eq!(binary_search(&readings, &5), (2, true));
//! assert_eq!(binary_search(&readings, &4), (2, false));
//!
//! let doubled = map(&readings, |x| x * 2);
//! let big = filter(&doubled, |&x| x > 5);
//! assert_eq!(big, vec![6, 10, 18]);
//! ```

// Module declarations
mod dedup;
mod edit;
mod order;
mod query;
mod search;
mod sort;
mod transform;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use dedup::{compact, compact_by};
pub use edit::{clip, clone, delete, delete_by, grow, insert, replace, reverse};
pub use order::{
    compare, compare_by, equal, equal_by, is_sorted, is_sorted_by, max, max_by, min, min_by,
};
pub use query::{contains, contains_by, every, find, find_or_default, index, index_by, some};
pub use search::{binary_search, binary_search_by};
pub use sort::{sort, sort_by, sort_stable_by};
pub use transform::{filter, flatten, map, reduce, unzip, zip, Pair};
pub use verify::{SliceError, SortedVec};
