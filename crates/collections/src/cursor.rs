//! Pull-based cursors that can remove what they just yielded
//!
//! Rust iterators only pull. Filtering cursors also need to forward a
//! "remove the element you last returned" request to the sequence they wrap,
//! which is what [`RemoveCurrent`] describes.

use constrained_core::error::{CollectionError, Result};

/// A cursor that can remove the element it most recently yielded
pub trait RemoveCurrent {
    /// Remove the most recently yielded element from the backing storage
    ///
    /// Fails with `InvalidState` if nothing was yielded yet, or the last
    /// yielded element was already removed.
    fn remove_current(&mut self) -> Result<()>;
}

/// Cursor over a `Vec<T>` that yields clones and supports removal
///
/// ```rust
/// use constrained_collections::{RemoveCurrent, VecCursor};
///
/// let mut numbers = vec![1, 2, 3];
/// let mut cursor = VecCursor::new(&mut numbers);
/// assert_eq!(cursor.next(), Some(1));
/// cursor.remove_current()?;
/// assert_eq!(cursor.next(), Some(2));
/// drop(cursor);
/// assert_eq!(numbers, vec![2, 3]);
/// # Ok::<(), constrained_collections::CollectionError>(())
/// ```
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    last_returned: Option<usize>,
}

impl<'a, T> VecCursor<'a, T> {
    /// Start a cursor at the front of `items`
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            last_returned: None,
        }
    }

    /// Index of the next element to be yielded
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T: Clone> Iterator for VecCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.position)?.clone();
        self.last_returned = Some(self.position);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.position;
        (left, Some(left))
    }
}

impl<T> RemoveCurrent for VecCursor<'_, T> {
    fn remove_current(&mut self) -> Result<()> {
        let index = self
            .last_returned
            .take()
            .ok_or_else(|| CollectionError::invalid_state("no yielded element to remove"))?;
        self.items.remove(index);
        self.position -= 1;
        Ok(())
    }
}
