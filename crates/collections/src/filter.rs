//! FilteringCursor: a lazy cursor that skips elements failing a predicate
//!
//! The cursor pulls from an inner sequence and holds at most one qualifying
//! element of lookahead. `has_next` fills the lookahead; `try_next` drains it.
//! Repeated `has_next` calls never advance the inner sequence twice.
//!
//! Scanning consumes the inner sequence irreversibly: rejected elements are
//! dropped. Rebinding the inner sequence or the predicate discards the
//! lookahead.
//!
//! `remove_current` is only allowed right after a successful `try_next`. Any
//! scan since then may have left the inner cursor on a rejected element.

use crate::cursor::RemoveCurrent;
use constrained_core::error::{CollectionError, Result};
use constrained_core::predicate::{BoxedPredicate, Predicate};
use std::fmt;
use tracing::warn;

/// Lazy, forward-only filtered view over an inner sequence
///
/// ## Example
///
/// ```rust
/// use constrained_collections::FilteringCursor;
///
/// let mut evens = FilteringCursor::with_predicate(1..=6, |n: &i32| n % 2 == 0);
/// assert!(evens.has_next()?);
/// assert_eq!(evens.try_next()?, 2);
/// assert_eq!(evens.collect::<Vec<_>>(), vec![4, 6]);
/// # Ok::<(), constrained_collections::CollectionError>(())
/// ```
pub struct FilteringCursor<I: Iterator> {
    inner: Option<I>,
    predicate: Option<BoxedPredicate<I::Item>>,
    pending: Option<I::Item>,
    removable: bool,
}

impl<I: Iterator> Default for FilteringCursor<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Iterator> FilteringCursor<I> {
    /// Create an unbound cursor; pulls fail until both parts are set
    pub fn new() -> Self {
        Self {
            inner: None,
            predicate: None,
            pending: None,
            removable: false,
        }
    }

    /// Create a cursor over `inner` with no predicate yet
    pub fn with_inner(inner: I) -> Self {
        Self {
            inner: Some(inner),
            predicate: None,
            pending: None,
            removable: false,
        }
    }

    /// Create a fully bound cursor
    pub fn with_predicate<P>(inner: I, predicate: P) -> Self
    where
        P: Predicate<I::Item> + Send + Sync + 'static,
    {
        Self {
            inner: Some(inner),
            predicate: Some(Box::new(predicate)),
            pending: None,
            removable: false,
        }
    }

    /// Replace the inner sequence and discard any lookahead
    pub fn set_inner(&mut self, inner: I) {
        self.inner = Some(inner);
        self.pending = None;
        self.removable = false;
    }

    /// Replace the predicate and discard any lookahead
    pub fn set_predicate<P>(&mut self, predicate: P)
    where
        P: Predicate<I::Item> + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self.pending = None;
    }

    /// The inner sequence, if bound
    pub fn inner(&self) -> Option<&I> {
        self.inner.as_ref()
    }

    /// Whether a predicate is bound
    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Whether a qualifying element remains
    ///
    /// Scans the inner sequence only when no lookahead is held, so calling
    /// this repeatedly is an idempotent peek.
    pub fn has_next(&mut self) -> Result<bool> {
        self.removable = false;
        if self.pending.is_none() {
            self.pending = self.scan()?;
        }
        Ok(self.pending.is_some())
    }

    /// Next qualifying element
    ///
    /// Fails with `EndOfSequence` once no qualifying element remains.
    pub fn try_next(&mut self) -> Result<I::Item> {
        self.removable = false;
        let item = match self.pending.take() {
            Some(item) => item,
            None => self.scan()?.ok_or(CollectionError::EndOfSequence)?,
        };
        self.removable = true;
        Ok(item)
    }

    fn scan(&mut self) -> Result<Option<I::Item>> {
        let inner = self
            .inner
            .as_mut()
            .ok_or(CollectionError::NotConfigured("inner sequence"))?;
        let predicate = self
            .predicate
            .as_ref()
            .ok_or(CollectionError::NotConfigured("predicate"))?;

        for item in inner {
            if predicate.evaluate(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

impl<I> RemoveCurrent for FilteringCursor<I>
where
    I: Iterator + RemoveCurrent,
{
    /// Remove the element last returned by `try_next` from the inner sequence
    ///
    /// Fails with `InvalidState` unless the last call was a `try_next` that
    /// yielded an element. A `has_next` or failed `try_next` in between may
    /// have moved the inner cursor onto a rejected element.
    fn remove_current(&mut self) -> Result<()> {
        if !self.removable {
            return Err(CollectionError::invalid_state(
                "no element returned by try_next() since the last scan",
            ));
        }
        self.inner
            .as_mut()
            .ok_or(CollectionError::NotConfigured("inner sequence"))?
            .remove_current()?;
        self.removable = false;
        Ok(())
    }
}

impl<I: Iterator> Iterator for FilteringCursor<I> {
    type Item = I::Item;

    /// Yields qualifying elements
    ///
    /// An unbound cursor yields nothing and logs a warning; use `try_next`
    /// to get `NotConfigured` as an error.
    fn next(&mut self) -> Option<I::Item> {
        match self.try_next() {
            Ok(item) => Some(item),
            Err(CollectionError::EndOfSequence) => None,
            Err(err) => {
                warn!(error = %err, "filtering cursor iterated before it was configured");
                None
            }
        }
    }
}

impl<I> fmt::Debug for FilteringCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteringCursor")
            .field("inner", &self.inner)
            .field("has_predicate", &self.predicate.is_some())
            .field("pending", &self.pending)
            .field("removable", &self.removable)
            .finish()
    }
}
