//! ValidatingMap: a map decorator that checks every pair before it lands
//!
//! ## Invariant
//!
//! Every (key, value) pair held by the inner map satisfies the key predicate
//! and the value predicate, whichever are set. The invariant is established
//! at construction, by validating the pairs already present, and kept by
//! validating every insertion and every value replacement.
//!
//! ## All-or-Nothing
//!
//! `put_all` validates the whole batch first and only then writes, so one
//! rejected pair leaves the inner map exactly as it was.

use constrained_core::error::{CollectionError, Operand, Result};
use constrained_core::predicate::{BoxedPredicate, Predicate};
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use tracing::debug;

// ============================================================================
// KeyedStore - the key-unique storage a ValidatingMap wraps
// ============================================================================

/// Key-unique map storage
///
/// Implemented for `HashMap` and `BTreeMap`; any map with unique keys can
/// implement it to be decorated by [`ValidatingMap`].
pub trait KeyedStore {
    /// Key type
    type Key;
    /// Value type
    type Value;

    /// Iterator over shared entries
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Iterator over entries with mutable values
    type IterMut<'a>: Iterator<Item = (&'a Self::Key, &'a mut Self::Value)>
    where
        Self: 'a;

    /// Value stored under `key`
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Mutable value stored under `key`
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Whether `key` is present
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Insert or overwrite, returning the previous value
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Remove `key`, returning its value
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Whether the map is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry
    fn clear(&mut self);

    /// Iterate over entries
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterate over entries with mutable values
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

impl<K, V, S> KeyedStore for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;
    type IterMut<'a> = hash_map::IterMut<'a, K, V> where Self: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        HashMap::iter_mut(self)
    }
}

impl<K: Ord, V> KeyedStore for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, K, V> where Self: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        BTreeMap::iter_mut(self)
    }
}

// ============================================================================
// Validation
// ============================================================================

fn check_pair<K, V>(
    key_predicate: Option<&BoxedPredicate<K>>,
    value_predicate: Option<&BoxedPredicate<V>>,
    key: &K,
    value: &V,
) -> Result<()> {
    if let Some(predicate) = key_predicate {
        if !predicate.evaluate(key) {
            return Err(rejected(Operand::Key));
        }
    }
    check_value(value_predicate, value)
}

fn check_value<V>(value_predicate: Option<&BoxedPredicate<V>>, value: &V) -> Result<()> {
    match value_predicate {
        Some(predicate) if !predicate.evaluate(value) => Err(rejected(Operand::Value)),
        _ => Ok(()),
    }
}

fn rejected(operand: Operand) -> CollectionError {
    debug!(%operand, "validating map rejected pair");
    CollectionError::ValidationRejected { operand }
}

// ============================================================================
// ValidatingMap
// ============================================================================

/// Builder for [`ValidatingMap`]
///
/// Predicates left unset impose no constraint.
pub struct ValidatingMapBuilder<M: KeyedStore> {
    inner: M,
    key_predicate: Option<BoxedPredicate<M::Key>>,
    value_predicate: Option<BoxedPredicate<M::Value>>,
}

impl<M: KeyedStore> ValidatingMapBuilder<M> {
    /// Constrain keys
    pub fn key_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<M::Key> + Send + Sync + 'static,
    {
        self.key_predicate = Some(Box::new(predicate));
        self
    }

    /// Constrain values
    pub fn value_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<M::Value> + Send + Sync + 'static,
    {
        self.value_predicate = Some(Box::new(predicate));
        self
    }

    /// Validate every pair already in the inner map and build the decorator
    ///
    /// Fails with `ValidationRejected` at the first offending pair; no
    /// decorator is produced.
    pub fn build(self) -> Result<ValidatingMap<M>> {
        for (key, value) in self.inner.iter() {
            check_pair(
                self.key_predicate.as_ref(),
                self.value_predicate.as_ref(),
                key,
                value,
            )?;
        }
        Ok(ValidatingMap {
            inner: self.inner,
            key_predicate: self.key_predicate,
            value_predicate: self.value_predicate,
        })
    }
}

/// A map decorator that validates every pair against optional predicates
///
/// ## Example
///
/// ```rust
/// use constrained_collections::ValidatingMap;
/// use std::collections::HashMap;
///
/// let mut letters = ValidatingMap::builder(HashMap::from([(1, "a".to_string())]))
///     .value_predicate(|v: &String| v.len() == 1)
///     .build()?;
///
/// letters.put(2, "b".to_string())?;
/// assert!(letters.put(3, "cc".to_string()).is_err());
/// assert_eq!(letters.len(), 2);
/// # Ok::<(), constrained_collections::CollectionError>(())
/// ```
pub struct ValidatingMap<M: KeyedStore> {
    inner: M,
    key_predicate: Option<BoxedPredicate<M::Key>>,
    value_predicate: Option<BoxedPredicate<M::Value>>,
}

impl<M: KeyedStore> ValidatingMap<M> {
    /// Start building a decorator over `inner`
    pub fn builder(inner: M) -> ValidatingMapBuilder<M> {
        ValidatingMapBuilder {
            inner,
            key_predicate: None,
            value_predicate: None,
        }
    }

    // ========== Validated writes ==========

    /// Insert or overwrite a pair, returning the previous value
    pub fn put(&mut self, key: M::Key, value: M::Value) -> Result<Option<M::Value>> {
        self.validate(&key, &value)?;
        Ok(self.inner.insert(key, value))
    }

    /// Insert every pair, or none of them
    pub fn put_all<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (M::Key, M::Value)>,
    {
        let pairs: Vec<(M::Key, M::Value)> = pairs.into_iter().collect();
        for (key, value) in &pairs {
            self.validate(key, value)?;
        }
        for (key, value) in pairs {
            self.inner.insert(key, value);
        }
        Ok(())
    }

    /// Validated mutable view of the entry under `key`
    pub fn entry_mut<'a>(
        &'a mut self,
        key: &'a M::Key,
    ) -> Option<ValidatedEntry<'a, M::Key, M::Value>> {
        let value_predicate = self.value_predicate.as_ref();
        self.inner.get_mut(key).map(|value| ValidatedEntry {
            key,
            value,
            value_predicate,
        })
    }

    /// Validated mutable views of every entry
    pub fn entries_mut(
        &mut self,
    ) -> impl Iterator<Item = ValidatedEntry<'_, M::Key, M::Value>> + '_ {
        let value_predicate = self.value_predicate.as_ref();
        self.inner.iter_mut().map(move |(key, value)| ValidatedEntry {
            key,
            value,
            value_predicate,
        })
    }

    /// Check a pair against the active predicates without inserting it
    pub fn validate(&self, key: &M::Key, value: &M::Value) -> Result<()> {
        check_pair(
            self.key_predicate.as_ref(),
            self.value_predicate.as_ref(),
            key,
            value,
        )
    }

    // ========== Unconstrained operations ==========

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &M::Key) -> Option<M::Value> {
        self.inner.remove(key)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Value stored under `key`
    pub fn get(&self, key: &M::Key) -> Option<&M::Value> {
        self.inner.get(key)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over entries
    pub fn iter(&self) -> M::Iter<'_> {
        self.inner.iter()
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &M::Key> + '_ {
        self.inner.iter().map(|(key, _)| key)
    }

    /// Iterate over values
    pub fn values(&self) -> impl Iterator<Item = &M::Value> + '_ {
        self.inner.iter().map(|(_, value)| value)
    }

    /// Whether value replacement through entries is checked
    pub fn is_value_checking(&self) -> bool {
        self.value_predicate.is_some()
    }

    /// Whether keys are checked
    pub fn is_key_checking(&self) -> bool {
        self.key_predicate.is_some()
    }

    /// The decorated map
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap the decorated map
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M> fmt::Debug for ValidatingMap<M>
where
    M: KeyedStore + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingMap")
            .field("inner", &self.inner)
            .field("key_checking", &self.is_key_checking())
            .field("value_checking", &self.is_value_checking())
            .finish()
    }
}

/// Mutable view of one entry whose value writes are validated
pub struct ValidatedEntry<'a, K, V> {
    key: &'a K,
    value: &'a mut V,
    value_predicate: Option<&'a BoxedPredicate<V>>,
}

impl<K, V> ValidatedEntry<'_, K, V> {
    /// Entry key
    pub fn key(&self) -> &K {
        self.key
    }

    /// Current value
    pub fn value(&self) -> &V {
        self.value
    }

    /// Replace the value, returning the old one
    ///
    /// Fails with `ValidationRejected` if a value predicate is set and
    /// rejects `value`; the stored value is left unchanged.
    pub fn set_value(&mut self, value: V) -> Result<V> {
        check_value(self.value_predicate, &value)?;
        Ok(std::mem::replace(self.value, value))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ValidatedEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedEntry")
            .field("key", self.key)
            .field("value", self.value)
            .finish()
    }
}
