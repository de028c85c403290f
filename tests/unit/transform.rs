//! Tests for map, filter, reduce, flatten, zip and unzip.

use slicekit::{filter, flatten, map, reduce, unzip, zip, Pair};

#[test]
fn test_map_changes_element_type() {
    let numbers = [1, 2, 3];
    let labels = map(&numbers, |n| format!("#{}", n));
    assert_eq!(labels, vec!["#1", "#2", "#3"]);
}

#[test]
fn test_map_empty() {
    let empty: [u8; 0] = [];
    assert!(map(&empty, |b| u32::from(*b)).is_empty());
}

#[test]
fn test_filter_even() {
    let numbers = [1, 2, 3, 4, 5, 6];
    assert_eq!(filter(&numbers, |n| n % 2 == 0), vec![2, 4, 6]);
}

#[test]
fn test_filter_nothing_matches() {
    let numbers = [1, 3, 5];
    assert!(filter(&numbers, |n| n % 2 == 0).is_empty());
}

#[test]
fn test_reduce_sum_and_concat() {
    assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, x| acc + x, 0), 15);

    let words = ["a", "b", "c"];
    let joined = reduce(&words, |mut acc: String, w| {
        acc.push_str(w);
        acc
    }, String::new());
    assert_eq!(joined, "abc");
}

#[test]
fn test_reduce_empty_returns_initial() {
    let empty: [i32; 0] = [];
    assert_eq!(reduce(&empty, |acc, x| acc + x, 42), 42);
}

#[test]
fn test_flatten_keeps_order_and_skips_empty() {
    let nested = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
    assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);

    let slices: [&[char]; 2] = [&['a'], &['b', 'c']];
    assert_eq!(flatten(&slices), vec!['a', 'b', 'c']);
}

#[test]
fn test_zip_truncates_to_shorter() {
    let names = ["Alice", "Bob", "Charlie"];
    let ages = [25, 30];
    let pairs = zip(&names, &ages);
    assert_eq!(pairs, vec![Pair::new("Alice", 25), Pair::new("Bob", 30)]);
}

#[test]
fn test_unzip_splits_pairs() {
    let pairs = vec![Pair::new(1, 'x'), Pair::new(2, 'y')];
    let (numbers, letters) = unzip(pairs);
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(letters, vec!['x', 'y']);
}

#[test]
fn test_pair_tuple_conversions() {
    let pair: Pair<&str, u32> = ("Alice", 25).into();
    assert_eq!(pair.first, "Alice");
    assert_eq!(pair.second, 25);
    let (name, age): (&str, u32) = pair.into();
    assert_eq!((name, age), ("Alice", 25));
    assert_eq!(Pair::new(1, 2).into_tuple(), (1, 2));
}
