//! Shared: one exclusive lock per collection instance
//!
//! None of the collections synchronize internally. To use one from several
//! threads, wrap it in `Shared` and make every call through `with` (or a
//! held guard). Each call runs under the instance's lock, so a state change
//! made by one thread, such as a ranking locking itself on first comparison,
//! is visible to every later call on any thread.

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::Arc;

/// A collection behind a per-instance `parking_lot::Mutex`
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Shared<T> {
    /// Move `component` behind a lock
    pub fn new(component: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(component)),
        }
    }

    /// Run `f` with exclusive access for the duration of one call
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Hold exclusive access across several calls
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    /// Recover the component if this is the last handle
    pub fn try_unwrap(self) -> Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.inner).finish()
    }
}
