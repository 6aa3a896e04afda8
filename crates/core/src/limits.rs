//! Size limits for bounded containers
//!
//! Capacity requests are checked against these limits before a container
//! allocates anything. Violations result in `InvalidCapacity` errors.
//!
//! Custom limits can be supplied at construction time or through
//! [`CollectionsConfig`](crate::config::CollectionsConfig).

use crate::error::{CollectionError, Result};

/// Default ceiling on a container's capacity
pub const DEFAULT_MAX_CAPACITY: usize = 1_000_000;

/// Largest number of slots reserved up front, regardless of capacity
pub const MAX_PREALLOCATION: usize = 4096;

/// Size limits for bounded containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum capacity a container may be created with (default: 1M)
    pub max_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// Useful for unit tests that exercise the ceiling without building
    /// very large containers.
    pub fn with_small_limits() -> Self {
        Limits { max_capacity: 16 }
    }

    /// Validate a capacity request
    ///
    /// Returns `Ok(())` when `1 <= capacity <= max_capacity`, otherwise
    /// `Err(CollectionError::InvalidCapacity)`.
    pub fn validate_capacity(&self, capacity: usize) -> Result<()> {
        if capacity == 0 || capacity > self.max_capacity {
            return Err(CollectionError::InvalidCapacity {
                capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }

    /// Number of slots to reserve for a container of `capacity`
    pub fn preallocation(&self, capacity: usize) -> usize {
        capacity.min(MAX_PREALLOCATION)
    }
}
