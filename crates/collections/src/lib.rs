//! Constrained collections
//!
//! Four independent containers, each wrapping a primitive container and
//! enforcing one invariant on every mutation:
//!
//! - **BoundedRankedContainer**: capacity-bounded list that reports its best element
//! - **FixedOrderRanking**: total order defined by registration order, frozen on first use
//! - **FilteringCursor**: lazy cursor that skips elements failing a predicate
//! - **ValidatingMap**: map decorator that validates every key/value pair
//!
//! ## Validate, Then Apply
//!
//! Every mutation checks its input completely before changing anything. A
//! failed call leaves the collection exactly as it was.
//!
//! ## Threading
//!
//! Collections are single-threaded values. Use [`Shared`] to put one behind
//! an exclusive lock when several threads need it.
//!
//! ```rust
//! use constrained_collections::{BoundedRankedContainer, FixedOrderRanking};
//!
//! let mut ranking = FixedOrderRanking::from_order(["bronze", "silver", "gold"]);
//! let mut medals = BoundedRankedContainer::with_elements(vec!["silver", "gold", "bronze"], 3)?;
//!
//! let best = medals.fittest_by(|a, b| ranking.compare(a, b).unwrap_or(std::cmp::Ordering::Equal));
//! assert_eq!(best, Some(&"gold"));
//! assert!(medals.append("tin").is_err());
//! # Ok::<(), constrained_collections::CollectionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bounded;
pub mod cursor;
pub mod filter;
pub mod ranking;
pub mod shared;
pub mod validated;

pub use bounded::BoundedRankedContainer;
pub use cursor::{RemoveCurrent, VecCursor};
pub use filter::FilteringCursor;
pub use ranking::{FixedOrderRanking, RankingSpec, RankingState, Registration};
pub use shared::Shared;
pub use validated::{KeyedStore, ValidatedEntry, ValidatingMap, ValidatingMapBuilder};

// Re-export core types so callers need a single dependency
pub use constrained_core::{
    BoxedPredicate, CollectionError, CollectionsConfig, ConfigError, Limits, Operand, Predicate,
    Result, UnrankedPolicy,
};
