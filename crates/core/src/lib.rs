//! Core types for constrained collections
//!
//! This crate defines the foundational types shared by every collection:
//! - Error: the failure taxonomy and `Result` alias
//! - Limits: capacity ceilings for bounded containers
//! - UnrankedPolicy: how rankings order unregistered elements
//! - Predicate: the boolean test used by filters and validators
//! - CollectionsConfig: defaults loaded from `constrained.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod policy;
pub mod predicate;

pub use config::{CollectionsConfig, ConfigError, CONFIG_FILE_NAME};
pub use error::{CollectionError, Operand, Result};
pub use limits::{Limits, DEFAULT_MAX_CAPACITY};
pub use policy::UnrankedPolicy;
pub use predicate::{BoxedPredicate, Predicate};
