//! Type-erased, shared predicates.

use std::fmt;
use std::sync::Arc;

use super::combinators::Predicate;

/// A type-erased predicate behind a shared pointer.
///
/// Cloning is cheap and shares the underlying predicate, which is what lets
/// derived views (pieces of a split, substrings) keep the exact filter of the
/// view they came from. Checking costs one indirect call.
///
/// The predicate may borrow data for `'p`, so a closure over a local lookup
/// table works as long as the table outlives the handle.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let filter: Filter = Filter::new(|c: &u8| c.is_ascii_uppercase());
/// let shared = filter.clone();
/// assert!(shared.check(&b'Q'));
/// assert!(filter.ptr_eq(&shared));
/// ```
pub struct BoxedPredicate<'p, T: ?Sized> {
    inner: Arc<dyn Predicate<T> + 'p>,
}

/// The filter attached to a view: a boxed predicate over single bytes.
pub type Filter<'p> = BoxedPredicate<'p, u8>;

impl<'p, T: ?Sized> BoxedPredicate<'p, T> {
    /// Box a predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'p,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }

    /// Returns true if both handles share the same predicate.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<'p, T: ?Sized + 'p> BoxedPredicate<'p, T> {
    /// A predicate that accepts every value.
    pub fn always() -> Self {
        Self::new(|_: &T| true)
    }
}

impl<'p, T: ?Sized + 'p> Default for BoxedPredicate<'p, T> {
    fn default() -> Self {
        Self::always()
    }
}

impl<T: ?Sized> Clone for BoxedPredicate<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.inner.check(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}
