//! Tests for find, some, every, contains and index.

use super::common::{people_by_age, Person};
use slicekit::{contains, contains_by, every, find, find_or_default, index, index_by, some};

#[test]
fn test_find_first_match() {
    let numbers = [1, 2, 3, 4, 5];
    assert_eq!(find(&numbers, |n| *n > 3), Some(&4));
    assert_eq!(find(&numbers, |n| *n > 10), None);
}

#[test]
fn test_find_or_default_reports_absence() {
    assert_eq!(find_or_default(&[1, 2, 3], |n| *n > 10), (0, false));
    assert_eq!(find_or_default(&[1, 2, 3], |n| *n > 1), (2, true));

    let people = people_by_age();
    let (nobody, found) = find_or_default(&people, |p| p.age > 99);
    assert!(!found);
    assert_eq!(nobody, Person::default());
}

#[test]
fn test_some_and_every() {
    let numbers = [2, 4, 6];
    assert!(every(&numbers, |n| n % 2 == 0));
    assert!(!some(&numbers, |n| n % 2 == 1));

    let empty: [i32; 0] = [];
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}

#[test]
fn test_contains() {
    assert!(contains(&["go", "rust"], &"rust"));
    assert!(!contains(&["go", "rust"], &"zig"));

    let people = people_by_age();
    assert!(contains_by(&people, |p| p.name == "Bob"));
    assert!(!contains_by(&people, |p| p.name == "Dave"));
}

#[test]
fn test_index_returns_first_position() {
    let values = [5, 7, 5, 9];
    assert_eq!(index(&values, &5), Some(0));
    assert_eq!(index(&values, &9), Some(3));
    assert_eq!(index(&values, &1), None);

    let people = people_by_age();
    assert_eq!(index_by(&people, |p| p.age >= 30), Some(1));
    assert_eq!(index_by(&people, |p| p.age > 40), None);
}
