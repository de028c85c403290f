//! Tests for range edits, predicate deletion, reverse, capacity and clone.

use slicekit::{clip, clone, compact, compact_by, delete, delete_by, grow, insert, replace, reverse};

#[test]
fn test_delete_range() {
    let mut v = vec![1, 2, 3, 4, 5];
    delete(&mut v, 1, 3);
    assert_eq!(v, vec![1, 4, 5]);

    delete(&mut v, 0, 0);
    assert_eq!(v, vec![1, 4, 5]);

    delete(&mut v, 0, 3);
    assert!(v.is_empty());
}

#[test]
#[should_panic(expected = "delete: range end 9 out of bounds for length 3")]
fn test_delete_out_of_bounds_panics() {
    let mut v = vec![1, 2, 3];
    delete(&mut v, 1, 9);
}

#[test]
fn test_delete_by_keeps_survivor_order() {
    let mut v = vec![1, 2, 3, 4, 5, 6, 7];
    delete_by(&mut v, |n| n % 3 == 0);
    assert_eq!(v, vec![1, 2, 4, 5, 7]);

    let mut all = vec![1, 2];
    delete_by(&mut all, |_| true);
    assert!(all.is_empty());
}

#[test]
fn test_insert_front_middle_end() {
    let mut v = vec![2, 4];
    insert(&mut v, 0, [1]);
    insert(&mut v, 2, [3]);
    insert(&mut v, 4, [5, 6]);
    assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);

    insert(&mut v, 3, std::iter::empty());
    assert_eq!(v.len(), 6);
}

#[test]
#[should_panic(expected = "insert: insertion index 4 out of bounds for length 3")]
fn test_insert_past_end_panics() {
    let mut v = vec![1, 2, 3];
    insert(&mut v, 4, [0]);
}

#[test]
fn test_replace_grows_and_shrinks() {
    let mut v = vec![1, 2, 3, 4, 5];
    replace(&mut v, 1, 4, [6, 7]);
    assert_eq!(v, vec![1, 6, 7, 5]);

    replace(&mut v, 1, 2, [8, 9, 10]);
    assert_eq!(v, vec![1, 8, 9, 10, 7, 5]);
}

#[test]
#[should_panic(expected = "replace: range start 3 is after range end 1")]
fn test_replace_inverted_range_panics() {
    let mut v = vec![1, 2, 3, 4];
    replace(&mut v, 3, 1, [0]);
}

#[test]
fn test_reverse_odd_and_even() {
    let mut odd = [1, 2, 3, 4, 5];
    reverse(&mut odd);
    assert_eq!(odd, [5, 4, 3, 2, 1]);

    let mut even = ['a', 'b', 'c', 'd'];
    reverse(&mut even);
    assert_eq!(even, ['d', 'c', 'b', 'a']);

    let mut empty: [u8; 0] = [];
    reverse(&mut empty);
}

#[test]
fn test_grow_and_clip_keep_contents() {
    let mut v = vec![1, 2, 3];
    grow(&mut v, 100);
    assert!(v.capacity() >= 103);
    assert_eq!(v, vec![1, 2, 3]);

    clip(&mut v);
    assert_eq!(v, vec![1, 2, 3]);
    assert!(v.capacity() < 103);
}

#[test]
fn test_clone_is_independent() {
    let original = vec![String::from("a"), String::from("b")];
    let mut copy = clone(&original);
    copy[0].push('!');
    assert_eq!(original[0], "a");
    assert_eq!(copy[0], "a!");
    assert_eq!(copy.len(), original.len());
}

#[test]
fn test_compact_then_compact_by() {
    let mut v = vec![1, 1, 2, 3, 3, 3, 4, 4, 5];
    compact(&mut v);
    assert_eq!(v, vec![1, 2, 3, 4, 5]);

    let mut words = vec!["apple", "avocado", "banana", "blueberry", "apricot"];
    compact_by(&mut words, |a, b| a.as_bytes()[0] == b.as_bytes()[0]);
    assert_eq!(words, vec!["apple", "banana", "apricot"]);
}
