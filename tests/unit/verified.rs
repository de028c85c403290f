//! Tests for the checked operations and `SortedVec`.

use slicekit::verify::{try_delete, try_insert, try_max_by, try_min, try_replace};
use slicekit::{SliceError, SortedVec};

#[test]
fn test_try_delete_rejects_without_mutating() {
    let mut v = vec![1, 2, 3];
    assert_eq!(
        try_delete(&mut v, 2, 1),
        Err(SliceError::RangeStartAfterEnd { start: 2, end: 1 })
    );
    assert_eq!(
        try_delete(&mut v, 0, 4),
        Err(SliceError::RangeEndOutOfBounds { end: 4, len: 3 })
    );
    assert_eq!(v, vec![1, 2, 3]);

    assert_eq!(try_delete(&mut v, 0, 1), Ok(()));
    assert_eq!(v, vec![2, 3]);
}

#[test]
fn test_try_insert_and_replace() {
    let mut v = vec![1, 4];
    assert_eq!(try_insert(&mut v, 1, [2, 3]), Ok(()));
    assert_eq!(v, vec![1, 2, 3, 4]);
    assert_eq!(
        try_insert(&mut v, 5, [9]),
        Err(SliceError::IndexOutOfBounds { index: 5, len: 4 })
    );

    assert_eq!(try_replace(&mut v, 1, 3, [0]), Ok(()));
    assert_eq!(v, vec![1, 0, 4]);
    assert!(try_replace(&mut v, 2, 7, [0]).is_err());
    assert_eq!(v, vec![1, 0, 4]);
}

#[test]
fn test_try_extrema() {
    let empty: [i32; 0] = [];
    assert_eq!(try_min(&empty), Err(SliceError::EmptySequence));
    assert_eq!(try_min(&[3, 1, 2]), Ok(&1));
    assert_eq!(try_max_by(&["a", "ccc", "bb"], |a, b| a.len().cmp(&b.len())), Ok(&"ccc"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SliceError::RangeEndOutOfBounds { end: 9, len: 3 }.to_string(),
        "range end 9 out of bounds for length 3"
    );
    assert_eq!(
        SliceError::Unsorted { position: 2 }.to_string(),
        "sequence not sorted at position 2"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(SliceError::EmptySequence);
    assert_eq!(boxed.to_string(), "empty sequence has no extremum");
}

#[test]
fn test_sorted_vec_rejects_unsorted() {
    assert_eq!(
        SortedVec::try_from_vec(vec![1, 3, 2]),
        Err(SliceError::Unsorted { position: 2 })
    );
    assert!(SortedVec::try_from(vec![1, 1, 2]).is_ok());
}

#[test]
fn test_sorted_vec_insert_remove() {
    let mut sv = SortedVec::from_unsorted(vec![30, 10, 20]);
    assert_eq!(sv.as_slice(), &[10, 20, 30]);

    assert_eq!(sv.insert(25), 2);
    assert_eq!(sv.insert(5), 0);
    assert_eq!(sv.as_slice(), &[5, 10, 20, 25, 30]);

    assert!(sv.contains(&25));
    assert_eq!(sv.remove(&25), Some(25));
    assert_eq!(sv.remove(&25), None);
    assert_eq!(sv.binary_search(&25), (3, false));

    assert_eq!(sv.first(), Some(&5));
    assert_eq!(sv.last(), Some(&30));
    assert_eq!(sv.len(), 4);
    let plain: Vec<i32> = sv.into();
    assert_eq!(plain, vec![5, 10, 20, 30]);
}

#[test]
fn test_sorted_vec_from_iterator() {
    let sv: SortedVec<char> = "hello".chars().collect();
    let collected: String = sv.iter().collect();
    assert_eq!(collected, "ehllo");
    assert!(SortedVec::<u8>::default().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip_and_validation() {
    use slicekit::Pair;

    let sv = SortedVec::from_unsorted(vec![3, 1, 2]);
    let json = serde_json::to_string(&sv).unwrap();
    assert_eq!(json, "[1,2,3]");
    let back: SortedVec<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sv);

    let bad: Result<SortedVec<i32>, _> = serde_json::from_str("[2,1]");
    assert!(bad.is_err());

    let pair = Pair::new("a", 1);
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"{"first":"a","second":1}"#);
}
