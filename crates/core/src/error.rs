//! Error types for constrained collections
//!
//! This module defines every failure a collection operation can surface.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All errors are raised synchronously at the offending call. A failed
//! mutation never leaves a collection partially modified.

use std::fmt;
use thiserror::Error;

/// Result type alias for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Which half of a key/value pair a predicate rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The key predicate rejected the key
    Key,
    /// The value predicate rejected the value
    Value,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Key => f.write_str("key"),
            Operand::Value => f.write_str("value"),
        }
    }
}

/// Error types for constrained collections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Capacity is zero or above the configured ceiling
    #[error("Invalid capacity: {capacity} (must be between 1 and {max})")]
    InvalidCapacity {
        /// Requested capacity
        capacity: usize,
        /// Largest capacity allowed by the active limits
        max: usize,
    },

    /// A required input was absent
    #[error("Null input: {0} must be present")]
    NullInput(&'static str),

    /// The operation would hold more elements than the capacity allows
    #[error("Capacity exceeded: {requested} elements requested, capacity is {capacity}")]
    CapacityExceeded {
        /// Number of elements the container would hold after the operation
        requested: usize,
        /// Current capacity
        capacity: usize,
    },

    /// A capacity change would drop below the number of held elements
    #[error("Capacity {capacity} is below current size {size}")]
    CapacityBelowCurrentSize {
        /// Requested capacity
        capacity: usize,
        /// Number of elements currently held
        size: usize,
    },

    /// The ranking was locked by a comparison and can no longer change
    #[error("Ranking is locked: cannot modify a fixed-order ranking after a comparison")]
    LockedRanking,

    /// An element has no rank
    #[error("Unknown element: {element}")]
    UnknownElement {
        /// Debug rendering of the unranked element
        element: String,
    },

    /// A textual or numeric policy value names no known policy
    #[error("Invalid unranked policy: {0:?}")]
    InvalidPolicy(String),

    /// A cursor was pulled before its dependencies were bound
    #[error("Not configured: {0} is not set")]
    NotConfigured(&'static str),

    /// No further qualifying element remains
    #[error("End of sequence")]
    EndOfSequence,

    /// The operation is not permitted in the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A predicate rejected a key or a value
    #[error("Validation rejected: predicate rejected the {operand}")]
    ValidationRejected {
        /// The rejected half of the pair
        operand: Operand,
    },
}

impl CollectionError {
    /// Build an `UnknownElement` error from any debuggable element
    pub fn unknown_element<T: fmt::Debug + ?Sized>(element: &T) -> Self {
        CollectionError::UnknownElement {
            element: format!("{:?}", element),
        }
    }

    /// Build an `InvalidState` error
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        CollectionError::InvalidState(reason.into())
    }

    /// Build a `ValidationRejected` error for a key
    pub fn rejected_key() -> Self {
        CollectionError::ValidationRejected {
            operand: Operand::Key,
        }
    }

    /// Build a `ValidationRejected` error for a value
    pub fn rejected_value() -> Self {
        CollectionError::ValidationRejected {
            operand: Operand::Value,
        }
    }

    /// Whether this error reports a capacity violation of any kind
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            CollectionError::InvalidCapacity { .. }
                | CollectionError::CapacityExceeded { .. }
                | CollectionError::CapacityBelowCurrentSize { .. }
        )
    }
}
