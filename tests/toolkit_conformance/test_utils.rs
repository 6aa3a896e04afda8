//! Test utilities for toolkit conformance tests
//!
//! Provides shared fixtures and assertion helpers.

#![allow(dead_code)]

pub use constrained::{
    BoundedRankedContainer, CollectionError, FilteringCursor, FixedOrderRanking, Operand, Shared,
    UnrankedPolicy, ValidatingMap,
};
use std::collections::HashMap;

// =============================================================================
// Fixtures
// =============================================================================

/// The four inner planets, Venus aliased to Earth's rank
pub fn planet_ranking() -> FixedOrderRanking<String> {
    let mut ranking = FixedOrderRanking::from_order(
        ["Mercury", "Venus", "Earth", "Mars"].map(String::from),
    );
    ranking
        .register_as_equal(&"Earth".to_string(), "Venus".to_string())
        .expect("Earth is ranked");
    ranking
}

/// Build a `HashMap<i32, String>` from borrowed pairs
pub fn string_map(pairs: &[(i32, &str)]) -> HashMap<i32, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

/// Value predicate used across the map tests
pub fn single_char(value: &String) -> bool {
    value.chars().count() == 1
}

/// Even-number predicate used across the cursor tests
pub fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

// =============================================================================
// Assertions
// =============================================================================

/// Assert that `result` failed with a capacity overflow
pub fn assert_capacity_exceeded<T: std::fmt::Debug>(result: Result<T, CollectionError>) {
    match result {
        Err(CollectionError::CapacityExceeded { .. }) => {}
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
}

/// Assert that `result` failed validation on `operand`
pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T, CollectionError>, operand: Operand) {
    match result {
        Err(CollectionError::ValidationRejected { operand: actual }) => assert_eq!(actual, operand),
        other => panic!("expected ValidationRejected({}), got {:?}", operand, other),
    }
}
