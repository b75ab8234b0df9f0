//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing the filters that views attach.

use super::boxed::BoxedPredicate;

/// A composable predicate over values of type T.
///
/// Views use `Predicate<u8>` to decide which bytes of the backing buffer
/// are visible. Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// Implementations must be pure: a view calls `check` an unspecified number
/// of times per query and expects the same answer for the same byte.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let hex_letter = is_ascii_hexdigit().and(is_ascii_digit().not());
/// assert!(hex_letter.check(&b'f'));
/// assert!(!hex_letter.check(&b'7'));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods except [`boxed`](PredicateExt::boxed) return concrete types.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = eq(b' ').or(eq(b'/')).not();
/// assert!(p.check(&b'a'));
/// assert!(!p.check(&b'/'));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::predicate::*;
    ///
    /// let p = is_ascii_alphanumeric().and(none_of_bytes(b"aeiou"));
    /// assert!(p.check(&b'z'));
    /// assert!(!p.check(&b'a'));
    /// assert!(!p.check(&b'-'));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::predicate::*;
    ///
    /// let p = is_ascii_digit().or(eq(b'.'));
    /// assert!(p.check(&b'3'));
    /// assert!(p.check(&b'.'));
    /// assert!(!p.check(&b'e'));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::predicate::*;
    ///
    /// let p = is_ascii_whitespace().not();
    /// assert!(p.check(&b'x'));
    /// assert!(!p.check(&b'\t'));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the predicate's type into a shared, cloneable handle.
    ///
    /// This is how a predicate becomes the filter of a view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::predicate::*;
    ///
    /// let filters: Vec<Filter> = vec![eq(b'a').boxed(), is_ascii_digit().boxed()];
    /// assert!(filters[0].check(&b'a'));
    /// assert!(filters[1].check(&b'9'));
    /// ```
    fn boxed<'p>(self) -> BoxedPredicate<'p, T>
    where
        Self: 'p,
    {
        BoxedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Check if all predicates are satisfied.
///
/// Accepts any collection of same-typed predicates; an empty collection
/// accepts everything. Evaluation stops at the first rejecting predicate.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = all_of(vec![eq(b'a').boxed(), is_ascii_alphabetic().boxed()]);
/// assert!(p.check(&b'a'));
/// assert!(!p.check(&b'b'));
/// ```
#[derive(Clone, Debug)]
pub struct AllOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = all_of([one_of(b"abc"), one_of(b"cde")]);
/// assert!(p.check(&b'c'));
/// assert!(!p.check(&b'a'));
/// ```
pub fn all_of<P>(predicates: impl IntoIterator<Item = P>) -> AllOf<P> {
    AllOf(predicates.into_iter().collect())
}

/// Check if any predicate is satisfied.
///
/// An empty collection accepts nothing.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = any_of([eq(b'c'), eq(b'+'), eq(b'/')]);
/// assert!(p.check(&b'+'));
/// assert!(!p.check(&b' '));
/// ```
pub fn any_of<P>(predicates: impl IntoIterator<Item = P>) -> AnyOf<P> {
    AnyOf(predicates.into_iter().collect())
}

/// Check if no predicates are satisfied.
///
/// Equivalent to `any_of(...).not()`.
#[derive(Clone, Debug)]
pub struct NoneOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NoneOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = none_of([eq(b' '), eq(b'\n')]);
/// assert!(p.check(&b'x'));
/// assert!(!p.check(&b' '));
/// ```
pub fn none_of<P>(predicates: impl IntoIterator<Item = P>) -> NoneOf<P> {
    NoneOf(predicates.into_iter().collect())
}
