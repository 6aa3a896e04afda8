//! ValidatingMap invariants
//!
//! - every held pair satisfies every set predicate
//! - construction over an invalid map fails
//! - rejected writes, single or bulk, change nothing

use crate::test_utils::*;
use std::collections::BTreeMap;

#[test]
fn invariant_construction_over_valid_map() {
    let map = ValidatingMap::builder(string_map(&[(1, "a"), (2, "b")]))
        .value_predicate(single_char)
        .build()
        .unwrap();
    assert_eq!(map.len(), 2);
}

#[test]
fn invariant_construction_over_invalid_map_fails() {
    let result = ValidatingMap::builder(string_map(&[(1, "a"), (2, "bb")]))
        .value_predicate(single_char)
        .build();
    assert_rejected(result.map(|m| m.len()), Operand::Value);
}

#[test]
fn invariant_put_all_with_one_invalid_pair_changes_nothing() {
    let mut map = ValidatingMap::builder(string_map(&[(1, "a")]))
        .value_predicate(single_char)
        .build()
        .unwrap();

    let result = map.put_all(vec![
        (2, "b".to_string()),
        (3, "c".to_string()),
        (4, "dd".to_string()),
        (5, "e".to_string()),
    ]);

    assert_rejected(result, Operand::Value);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1).map(String::as_str), Some("a"));
}

#[test]
fn invariant_key_predicate_guards_put_all() {
    let mut map = ValidatingMap::builder(BTreeMap::<i32, String>::new())
        .key_predicate(|k: &i32| (0..10).contains(k))
        .build()
        .unwrap();

    assert_rejected(
        map.put_all(vec![(1, "one".to_string()), (10, "ten".to_string())]),
        Operand::Key,
    );
    assert!(map.is_empty());
}

#[test]
fn invariant_entry_writes_are_validated() {
    let mut map = ValidatingMap::builder(string_map(&[(1, "a"), (2, "b")]))
        .value_predicate(single_char)
        .build()
        .unwrap();

    for mut entry in map.entries_mut() {
        assert_rejected(entry.set_value("long".to_string()), Operand::Value);
    }
    assert!(map.values().all(single_char));
}

#[test]
fn invariant_every_held_pair_satisfies_predicates() {
    let mut map = ValidatingMap::builder(string_map(&[]))
        .key_predicate(|k: &i32| *k >= 0)
        .value_predicate(single_char)
        .build()
        .unwrap();

    let attempts = [(1, "a"), (-1, "b"), (2, "cc"), (3, "d"), (-4, "ee")];
    for (k, v) in attempts {
        let _ = map.put(k, v.to_string());
    }

    assert_eq!(map.len(), 2);
    for (k, v) in map.iter() {
        assert!(*k >= 0);
        assert!(single_char(v));
    }
}
