//! FilteringCursor invariants
//!
//! - yields exactly the qualifying elements, in order
//! - `has_next` is an idempotent peek
//! - rebinding restarts cleanly with no lost or duplicated elements

use crate::test_utils::*;
use constrained::{RemoveCurrent, VecCursor};

#[test]
fn invariant_yields_exactly_the_evens() {
    let cursor = FilteringCursor::with_predicate(vec![1, 2, 3, 4, 5, 6].into_iter(), is_even);
    assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 4, 6]);
}

#[test]
fn invariant_second_traversal_after_rebinding_matches_first() {
    let source = vec![1, 2, 3, 4, 5, 6];
    let mut cursor = FilteringCursor::with_predicate(source.clone().into_iter(), is_even);

    let mut first = Vec::new();
    while cursor.has_next().unwrap() {
        first.push(cursor.try_next().unwrap());
    }

    cursor.set_inner(source.into_iter());
    let mut second = Vec::new();
    while cursor.has_next().unwrap() {
        second.push(cursor.try_next().unwrap());
    }

    assert_eq!(first, vec![2, 4, 6]);
    assert_eq!(second, first);
}

#[test]
fn invariant_peek_does_not_skip() {
    let mut cursor = FilteringCursor::with_predicate(vec![2, 4, 6].into_iter(), is_even);
    for _ in 0..5 {
        assert!(cursor.has_next().unwrap());
    }
    assert_eq!(cursor.try_next().unwrap(), 2);
    assert_eq!(cursor.try_next().unwrap(), 4);
}

#[test]
fn invariant_exhausted_cursor_reports_end() {
    let mut cursor = FilteringCursor::with_predicate(vec![1, 3].into_iter(), is_even);
    assert!(!cursor.has_next().unwrap());
    assert_eq!(cursor.try_next(), Err(CollectionError::EndOfSequence));
    assert_eq!(cursor.try_next(), Err(CollectionError::EndOfSequence));
}

#[test]
fn invariant_unconfigured_cursor_cannot_pull() {
    let mut cursor: FilteringCursor<std::vec::IntoIter<i32>> = FilteringCursor::new();
    assert!(matches!(
        cursor.has_next(),
        Err(CollectionError::NotConfigured(_))
    ));
    cursor.set_inner(vec![1].into_iter());
    assert!(matches!(
        cursor.try_next(),
        Err(CollectionError::NotConfigured("predicate"))
    ));
}

#[test]
fn invariant_remove_through_filter_removes_only_matches() {
    let mut numbers: Vec<i32> = (1..=10).collect();
    {
        let mut cursor = FilteringCursor::with_predicate(VecCursor::new(&mut numbers), is_even);
        while let Ok(n) = cursor.try_next() {
            if n > 4 {
                cursor.remove_current().unwrap();
            }
        }
    }
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 7, 9]);
}

#[test]
fn invariant_remove_after_peek_is_rejected() {
    let mut numbers = vec![2, 4, 6];
    let mut cursor = FilteringCursor::with_predicate(VecCursor::new(&mut numbers), is_even);
    assert_eq!(cursor.try_next().unwrap(), 2);
    cursor.has_next().unwrap();
    assert!(matches!(
        cursor.remove_current(),
        Err(CollectionError::InvalidState(_))
    ));
    drop(cursor);
    assert_eq!(numbers, vec![2, 4, 6]);
}

#[test]
fn invariant_remove_after_exhausting_peek_is_rejected() {
    let mut numbers = vec![2, 3];
    let mut cursor = FilteringCursor::with_predicate(VecCursor::new(&mut numbers), is_even);
    assert_eq!(cursor.try_next().unwrap(), 2);
    assert!(!cursor.has_next().unwrap());
    assert!(matches!(
        cursor.remove_current(),
        Err(CollectionError::InvalidState(_))
    ));
    drop(cursor);
    assert_eq!(numbers, vec![2, 3]);
}

#[test]
fn invariant_remove_after_peek_over_rejected_elements_is_rejected() {
    let mut numbers = vec![2, 3, 5, 6];
    let mut cursor = FilteringCursor::with_predicate(VecCursor::new(&mut numbers), is_even);
    assert_eq!(cursor.try_next().unwrap(), 2);
    assert!(cursor.has_next().unwrap());
    assert!(matches!(
        cursor.remove_current(),
        Err(CollectionError::InvalidState(_))
    ));
    assert_eq!(cursor.try_next().unwrap(), 6);
    cursor.remove_current().unwrap();
    drop(cursor);
    assert_eq!(numbers, vec![2, 3, 5]);
}
