//! Test utilities shared across unit tests, integration tests, benches and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

/// Record used throughout the tests for key-based searching and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: String,
    pub age: u32,
    /// Position in the original input, for checking sort stability.
    pub order_id: usize,
}

/// Create a test person.
///
/// This is the canonical implementation used across all tests.
pub fn make_person(name: &str, age: u32, order_id: usize) -> Person {
    Person {
        name: name.to_string(),
        age,
        order_id,
    }
}

/// Alice (25), Bob (30), Charlie (35): sorted by age and by name.
pub fn people_by_age() -> Vec<Person> {
    vec![
        make_person("Alice", 25, 0),
        make_person("Bob", 30, 1),
        make_person("Charlie", 35, 2),
    ]
}

/// Compare two people by age only.
pub fn by_age(a: &Person, b: &Person) -> std::cmp::Ordering {
    a.age.cmp(&b.age)
}

/// Deterministic pseudo-random values in `0..modulo` (xorshift64).
///
/// The same `(len, seed, modulo)` always yields the same sequence, so sort
/// benchmarks and regression tests are reproducible.
pub fn scrambled(len: usize, seed: u64, modulo: u64) -> Vec<u64> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % modulo.max(1)
        })
        .collect()
}
