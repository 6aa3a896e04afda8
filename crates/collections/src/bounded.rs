//! BoundedRankedContainer: a capacity-bounded list that tracks its best element
//!
//! ## Design Principles
//!
//! 1. **Hard Ceiling**: `len() <= capacity()` holds after every operation.
//! 2. **Validate, Then Apply**: bulk operations check the whole batch before
//!    touching the held elements, so a rejected call changes nothing.
//! 3. **Insertion Order**: elements are kept in the order they arrived.
//!
//! ## Ranking
//!
//! `fittest()` uses the element's own total order (`Ord`). Ties go to the
//! earliest element holding the maximum. Use `fittest_by` to supply an
//! explicit order instead.

use constrained_core::error::{CollectionError, Result};
use constrained_core::limits::Limits;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Persisted form of a container
///
/// `elements` is optional here so that an absent list can be reported as
/// `NullInput` rather than as a generic decoding failure. A missing
/// `max_capacity` falls back to the default limits.
#[derive(Debug, Deserialize)]
struct BoundedRepr<T> {
    elements: Option<Vec<T>>,
    capacity: usize,
    #[serde(default)]
    max_capacity: Option<usize>,
}

/// A capacity-bounded, insertion-ordered container
///
/// ## Example
///
/// ```rust
/// use constrained_collections::BoundedRankedContainer;
///
/// let mut population = BoundedRankedContainer::new(3)?;
/// population.append(4)?;
/// population.append_all(vec![9, 1])?;
///
/// assert_eq!(population.fittest(), Some(&9));
/// assert!(population.append(7).is_err());
/// # Ok::<(), constrained_collections::CollectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BoundedRepr<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct BoundedRankedContainer<T> {
    elements: Vec<T>,
    capacity: usize,
    #[serde(rename = "max_capacity", serialize_with = "serialize_max_capacity")]
    limits: Limits,
}

impl<T> BoundedRankedContainer<T> {
    /// Create an empty container
    ///
    /// Fails with `InvalidCapacity` if `capacity` is zero or above the
    /// default ceiling.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_limits(Vec::new(), capacity, Limits::default())
    }

    /// Create a container holding `elements`, in order
    ///
    /// Fails with `InvalidCapacity` for a bad capacity (checked first), then
    /// with `CapacityExceeded` if there are more elements than capacity.
    pub fn with_elements(elements: Vec<T>, capacity: usize) -> Result<Self> {
        Self::with_limits(elements, capacity, Limits::default())
    }

    /// Create a container against explicit limits
    pub fn with_limits(elements: Vec<T>, capacity: usize, limits: Limits) -> Result<Self> {
        limits.validate_capacity(capacity)?;
        check_fits(elements.len(), capacity)?;

        let mut held = Vec::with_capacity(limits.preallocation(capacity).max(elements.len()));
        held.extend(elements);
        Ok(Self {
            elements: held,
            capacity,
            limits,
        })
    }

    // ========== Mutation ==========

    /// Discard every held element and install `elements` instead
    ///
    /// The old elements are only dropped once the new list is known to fit.
    pub fn replace_all(&mut self, elements: Vec<T>) -> Result<()> {
        check_fits(elements.len(), self.capacity)?;
        self.elements.clear();
        self.elements.extend(elements);
        Ok(())
    }

    /// Append every element of `elements`, in order, or none of them
    pub fn append_all<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = elements.into_iter().collect();
        check_fits(self.elements.len() + incoming.len(), self.capacity)?;
        self.elements.extend(incoming);
        Ok(())
    }

    /// Append one element
    ///
    /// Fails with `CapacityExceeded` if the container is already full.
    pub fn append(&mut self, element: T) -> Result<()> {
        check_fits(self.elements.len() + 1, self.capacity)?;
        self.elements.push(element);
        Ok(())
    }

    /// Change the capacity
    ///
    /// Fails with `InvalidCapacity` for a zero or over-limit value and with
    /// `CapacityBelowCurrentSize` if the new capacity cannot hold the
    /// elements already present.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.limits.validate_capacity(capacity)?;
        if capacity < self.elements.len() {
            return Err(CollectionError::CapacityBelowCurrentSize {
                capacity,
                size: self.elements.len(),
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    // ========== Ranking ==========

    /// Highest-ranked element under an explicit total order
    ///
    /// Returns `None` on an empty container. Among equal maxima the earliest
    /// element wins.
    pub fn fittest_by<F>(&self, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut iter = self.elements.iter();
        let mut best = iter.next()?;
        for candidate in iter {
            if compare(candidate, best) == Ordering::Greater {
                best = candidate;
            }
        }
        Some(best)
    }

    /// Highest-ranked element by a derived key
    pub fn fittest_by_key<K, F>(&self, mut key: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.fittest_by(|a, b| key(a).cmp(&key(b)))
    }

    // ========== Accessors ==========

    /// Number of held elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the container holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether another append would fail
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Free slots left before the capacity is reached
    pub fn remaining(&self) -> usize {
        self.capacity - self.elements.len()
    }

    /// Maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Limits this container validates capacity changes against
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Read-only view of the held elements, in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the held elements, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Ord> BoundedRankedContainer<T> {
    /// Highest-ranked element by the element's own order
    ///
    /// Returns `None` on an empty container.
    pub fn fittest(&self) -> Option<&T> {
        self.fittest_by(Ord::cmp)
    }
}

fn check_fits(requested: usize, capacity: usize) -> Result<()> {
    if requested > capacity {
        debug!(requested, capacity, "bounded container rejected elements over capacity");
        return Err(CollectionError::CapacityExceeded {
            requested,
            capacity,
        });
    }
    Ok(())
}

fn serialize_max_capacity<S: Serializer>(
    limits: &Limits,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(limits.max_capacity as u64)
}

impl<T> TryFrom<BoundedRepr<T>> for BoundedRankedContainer<T> {
    type Error = CollectionError;

    fn try_from(repr: BoundedRepr<T>) -> Result<Self> {
        let limits = repr
            .max_capacity
            .map_or_else(Limits::default, |max_capacity| Limits { max_capacity });
        limits.validate_capacity(repr.capacity)?;
        let elements = repr.elements.ok_or(CollectionError::NullInput("elements"))?;
        Self::with_limits(elements, repr.capacity, limits)
    }
}

impl<'a, T> IntoIterator for &'a BoundedRankedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedRankedContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}
