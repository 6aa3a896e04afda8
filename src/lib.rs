//! Constrained - bounded, ranked, filtered and validated collections
//!
//! Each collection wraps a primitive container and enforces one invariant on
//! every mutation:
//!
//! | Collection                 | Invariant                                   |
//! |----------------------------|---------------------------------------------|
//! | `BoundedRankedContainer`   | never holds more than its capacity          |
//! | `FixedOrderRanking`        | ranks are frozen once comparisons begin     |
//! | `FilteringCursor`          | only yields elements the predicate admits   |
//! | `ValidatingMap`            | only holds pairs the predicates admit       |
//!
//! # Quick Start
//!
//! ```
//! use constrained::{FilteringCursor, ValidatingMap};
//! use std::collections::HashMap;
//!
//! let evens: Vec<i32> = FilteringCursor::with_predicate(1..=6, |n: &i32| n % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let mut names = ValidatingMap::builder(HashMap::<u32, String>::new())
//!     .key_predicate(|k: &u32| *k < 100)
//!     .value_predicate(|v: &String| !v.is_empty())
//!     .build()?;
//! names.put(7, "seven".to_string())?;
//! assert!(names.put(700, "too big".to_string()).is_err());
//! # Ok::<(), constrained::CollectionError>(())
//! ```
//!
//! # Architecture
//!
//! Errors, limits, policies, predicates and configuration live in
//! `constrained-core`; the collections live in `constrained-collections`.
//! This crate re-exports both.

// Re-export the public API from constrained-collections
pub use constrained_collections::*;

/// Configuration and limits
pub mod config {
    pub use constrained_core::config::*;
    pub use constrained_core::limits::*;
}
