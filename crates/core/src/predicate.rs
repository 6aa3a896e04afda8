//! Predicate abstraction
//!
//! A predicate is a pure function from an element to `bool`, used to admit or
//! reject elements and pairs. Any `Fn(&T) -> bool` closure is a predicate.

/// Boolean-valued test over one input
///
/// Implementations must be pure: the same input always yields the same
/// answer. Filtering cursors and validating maps rely on this to keep their
/// invariants.
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `item` is admitted
    fn evaluate(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, item: &T) -> bool {
        self(item)
    }
}

/// Owned, type-erased predicate
///
/// Boxed predicates are `Send + Sync` so the collections holding them can be
/// moved behind a lock and shared between threads.
pub type BoxedPredicate<T> = Box<dyn Predicate<T> + Send + Sync>;
