#![cfg(feature = "persistent")]
//! Integration tests for the persistent List.

use funcore::persistent::List;
use rstest::rstest;

#[rstest]
#[case(&[], &[], &[])]
#[case(&[1, 2], &[], &[1, 2])]
#[case(&[], &[3], &[3])]
#[case(&[1, 2], &[3, 4], &[1, 2, 3, 4])]
fn test_append(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    let appended = List::from_array(left).append(&List::from_array(right));
    assert_eq!(appended.to_array(), expected);
    assert_eq!(appended.len(), expected.len());
}

#[rstest]
fn test_append_leaves_operands_unchanged() {
    let left = List::from_array(&[1, 2]);
    let right = List::from_array(&[3]);
    let _ = left.append(&right);
    assert_eq!(left.to_array(), vec![1, 2]);
    assert_eq!(right.to_array(), vec![3]);
}

#[rstest]
#[case(&[], 0)]
#[case(&[1, 2, 3], 6)]
#[case(&[-5, 5, 10], 10)]
fn test_sum(#[case] elements: &[i64], #[case] expected: i64) {
    assert_eq!(List::from_array(elements).sum(), expected);
}

#[rstest]
fn test_prepend_shares_structure() {
    let base = List::from_array(&[2, 3]);
    let first = base.prepend(1);
    let second = base.prepend(0);
    assert_eq!(first.to_array(), vec![1, 2, 3]);
    assert_eq!(second.to_array(), vec![0, 2, 3]);
    assert_eq!(base.to_array(), vec![2, 3]);
}

#[rstest]
fn test_head_and_tail() {
    let list = List::from_array(&["a", "b"]);
    assert_eq!(list.head(), Some(&"a"));
    assert_eq!(list.tail().map(|tail| tail.to_array()), Some(vec!["b"]));
    assert_eq!(List::<i32>::empty().head(), None);
    assert!(List::<i32>::empty().tail().is_none());
}

#[rstest]
fn test_folds_keep_direction() {
    let list = List::from_array(&[1, 2, 3]);
    let left = list.fold_left(String::new(), |acc, n| format!("{acc}{n}"));
    let right = list.fold_right(String::new(), |n, acc| format!("{acc}{n}"));
    assert_eq!(left, "123");
    assert_eq!(right, "321");
}

#[rstest]
fn test_reverse_and_display() {
    let list = List::from_array(&[1, 2, 3]);
    assert_eq!(list.reverse().to_string(), "[3, 2, 1]");
    assert_eq!(List::<i32>::empty().to_string(), "[]");
}

#[rstest]
fn test_collect_and_iterate() {
    let list: List<i32> = (1..=4).collect();
    let doubled: Vec<i32> = list.iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_long_list_round_trip_and_drop() {
    let elements: Vec<u32> = (0..100_000).collect();
    let list = List::from_array(&elements);
    assert_eq!(list.len(), elements.len());
    assert_eq!(list.to_array(), elements);
}
