//! FixedOrderRanking: a total order defined by presentation order
//!
//! Elements are ranked in the order they are registered: the first one gets
//! rank 0 and every later registration gets the next integer. An element can
//! be aliased to an existing rank with `register_as_equal`.
//!
//! ## Locking
//!
//! The ranking starts `Open`. The first `compare` (or `sort`) moves it to
//! `Locked` for good; from then on every registration or policy change fails
//! with `LockedRanking`. Comparisons stay deterministic for the lifetime of
//! the ranking.
//!
//! ## Identity
//!
//! Ranks are keyed by value equality (`Eq + Hash`). Two equal values share
//! one rank, and registering an equal value again moves it to a later rank.

use constrained_core::config::CollectionsConfig;
use constrained_core::error::{CollectionError, Result};
use constrained_core::policy::UnrankedPolicy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Whether a ranking still accepts changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingState {
    /// Registrations and policy changes are accepted
    Open,
    /// A comparison has happened; the ranking is frozen
    Locked,
}

/// Outcome of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The element had no rank before
    Added,
    /// The element was already ranked; its rank was replaced
    AlreadyKnown,
}

impl Registration {
    /// Whether the element was newly ranked
    pub fn is_new(&self) -> bool {
        matches!(self, Registration::Added)
    }
}

/// Persisted description of a ranking
///
/// ```json
/// { "order": ["low", "medium", "high"], "unranked": "after" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSpec<T> {
    /// Elements in rank order
    pub order: Option<Vec<T>>,
    /// Policy for elements missing from `order`
    #[serde(default)]
    pub unranked: UnrankedPolicy,
}

/// A comparator that imposes a caller-defined total order
///
/// ## Example
///
/// ```rust
/// use constrained_collections::{FixedOrderRanking, UnrankedPolicy};
/// use std::cmp::Ordering;
///
/// let mut planets = FixedOrderRanking::from_order(["Mercury", "Venus", "Earth", "Mars"]);
/// planets.register_as_equal(&"Earth", "Terra")?;
/// planets.set_unranked_policy(UnrankedPolicy::After)?;
///
/// assert_eq!(planets.compare(&"Mercury", &"Mars")?, Ordering::Less);
/// assert_eq!(planets.compare(&"Terra", &"Earth")?, Ordering::Equal);
/// assert_eq!(planets.compare(&"Pluto", &"Mars")?, Ordering::Greater);
/// assert!(planets.register("Pluto").is_err());
/// # Ok::<(), constrained_collections::CollectionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FixedOrderRanking<T> {
    ranks: FxHashMap<T, usize>,
    next_rank: usize,
    policy: UnrankedPolicy,
    state: RankingState,
}

impl<T: Eq + Hash> Default for FixedOrderRanking<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FixedOrderRanking<T> {
    /// Create an empty ranking with the `Error` policy
    pub fn new() -> Self {
        Self {
            ranks: FxHashMap::default(),
            next_rank: 0,
            policy: UnrankedPolicy::default(),
            state: RankingState::Open,
        }
    }

    /// Create a ranking from elements in rank order
    pub fn from_order<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut ranking = Self::new();
        for item in items {
            ranking.assign(item);
        }
        ranking
    }

    /// Create a ranking from elements in rank order, with the policy taken
    /// from configuration
    pub fn from_config<I>(items: I, config: &CollectionsConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut ranking = Self::from_order(items);
        ranking.policy = config.unranked_policy()?;
        Ok(ranking)
    }

    // ========== Registration ==========

    /// Rank `item` after everything registered so far
    ///
    /// An already-ranked element is moved to the new rank and reported as
    /// `AlreadyKnown`.
    pub fn register(&mut self, item: T) -> Result<Registration> {
        self.check_open()?;
        Ok(self.assign(item))
    }

    /// Give `item` the same rank as `existing`
    ///
    /// Fails with `UnknownElement` if `existing` has no rank.
    pub fn register_as_equal(&mut self, existing: &T, item: T) -> Result<Registration>
    where
        T: Debug,
    {
        self.check_open()?;
        let rank = *self
            .ranks
            .get(existing)
            .ok_or_else(|| CollectionError::unknown_element(existing))?;
        Ok(match self.ranks.insert(item, rank) {
            None => Registration::Added,
            Some(_) => Registration::AlreadyKnown,
        })
    }

    /// Choose how unranked elements compare
    pub fn set_unranked_policy(&mut self, policy: UnrankedPolicy) -> Result<()> {
        self.check_open()?;
        self.policy = policy;
        Ok(())
    }

    fn assign(&mut self, item: T) -> Registration {
        let rank = self.next_rank;
        self.next_rank += 1;
        match self.ranks.insert(item, rank) {
            None => Registration::Added,
            Some(_) => Registration::AlreadyKnown,
        }
    }

    fn check_open(&self) -> Result<()> {
        match self.state {
            RankingState::Open => Ok(()),
            RankingState::Locked => Err(CollectionError::LockedRanking),
        }
    }

    fn lock(&mut self) {
        if self.state == RankingState::Open {
            self.state = RankingState::Locked;
            debug!(
                ranked = self.ranks.len(),
                policy = %self.policy,
                "fixed-order ranking locked"
            );
        }
    }

    // ========== Accessors ==========

    /// Rank of `item`, if registered
    pub fn rank_of(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// Whether `item` is registered
    pub fn contains(&self, item: &T) -> bool {
        self.ranks.contains_key(item)
    }

    /// Number of ranked elements, aliases included
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether nothing has been ranked
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Current state
    pub fn state(&self) -> RankingState {
        self.state
    }

    /// Whether a comparison has frozen the ranking
    pub fn is_locked(&self) -> bool {
        self.state == RankingState::Locked
    }

    /// Active unranked-element policy
    pub fn unranked_policy(&self) -> UnrankedPolicy {
        self.policy
    }
}

impl<T: Eq + Hash + Debug> FixedOrderRanking<T> {
    /// Compare two elements by rank
    ///
    /// Locks the ranking, even when the comparison itself fails. Under the
    /// `Error` policy an unranked operand fails with `UnknownElement`; the
    /// left operand is reported first.
    pub fn compare(&mut self, a: &T, b: &T) -> Result<Ordering> {
        self.lock();
        match (self.ranks.get(a), self.ranks.get(b)) {
            (Some(ra), Some(rb)) => Ok(ra.cmp(rb)),
            (ra, rb) => match self.policy {
                UnrankedPolicy::Before => Ok(match (ra, rb) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    _ => Ordering::Greater,
                }),
                UnrankedPolicy::After => Ok(match (ra, rb) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    _ => Ordering::Less,
                }),
                UnrankedPolicy::Error => {
                    let unknown = if ra.is_none() { a } else { b };
                    Err(CollectionError::unknown_element(unknown))
                }
            },
        }
    }

    /// Stable-sort `items` by rank
    ///
    /// Locks the ranking. Under the `Error` policy the slice is checked
    /// before it is reordered, so an unranked element leaves it untouched.
    pub fn sort(&mut self, items: &mut [T]) -> Result<()> {
        self.lock();
        if self.policy == UnrankedPolicy::Error {
            if let Some(unknown) = items.iter().find(|item| !self.ranks.contains_key(*item)) {
                return Err(CollectionError::unknown_element(unknown));
            }
        }
        items.sort_by_key(|item| self.sort_key(item));
        Ok(())
    }

    fn sort_key(&self, item: &T) -> (u8, usize) {
        match (self.ranks.get(item), self.policy) {
            (Some(rank), UnrankedPolicy::Before) => (1, *rank),
            (Some(rank), _) => (0, *rank),
            (None, UnrankedPolicy::Before) => (0, 0),
            (None, _) => (1, 0),
        }
    }
}

impl<T: Eq + Hash> TryFrom<RankingSpec<T>> for FixedOrderRanking<T> {
    type Error = CollectionError;

    fn try_from(spec: RankingSpec<T>) -> Result<Self> {
        let order = spec.order.ok_or(CollectionError::NullInput("order"))?;
        let mut ranking = Self::from_order(order);
        ranking.policy = spec.unranked;
        Ok(ranking)
    }
}
