//! Byte predicates
//!
//! Common character classes for filtering views. Everything here works on
//! single bytes; there is no Unicode awareness.

use super::combinators::Predicate;

/// Predicate that accepts exactly one byte value.
#[derive(Clone, Copy, Debug)]
pub struct Eq(pub u8);

impl Predicate<u8> for Eq {
    #[inline]
    fn check(&self, value: &u8) -> bool {
        *value == self.0
    }
}

/// Create a predicate that accepts only `byte`.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// assert!(eq(b'a').check(&b'a'));
/// assert!(!eq(b'a').check(&b'A'));
/// ```
pub fn eq(byte: u8) -> Eq {
    Eq(byte)
}

/// Predicate that accepts any byte from a set.
#[derive(Clone, Debug)]
pub struct OneOf<S>(pub S);

impl<S: AsRef<[u8]> + Send + Sync> Predicate<u8> for OneOf<S> {
    #[inline]
    fn check(&self, value: &u8) -> bool {
        self.0.as_ref().contains(value)
    }
}

/// Create a predicate that accepts any byte contained in `set`.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = one_of(b"c+/");
/// assert!(p.check(&b'+'));
/// assert!(!p.check(&b' '));
/// ```
pub fn one_of<S: AsRef<[u8]> + Send + Sync>(set: S) -> OneOf<S> {
    OneOf(set)
}

/// Predicate that rejects every byte from a set.
#[derive(Clone, Debug)]
pub struct NoneOfBytes<S>(pub S);

impl<S: AsRef<[u8]> + Send + Sync> Predicate<u8> for NoneOfBytes<S> {
    #[inline]
    fn check(&self, value: &u8) -> bool {
        !self.0.as_ref().contains(value)
    }
}

/// Create a predicate that accepts any byte not contained in `set`.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// let p = none_of_bytes(b"aeiou");
/// assert!(p.check(&b'z'));
/// assert!(!p.check(&b'e'));
/// ```
pub fn none_of_bytes<S: AsRef<[u8]> + Send + Sync>(set: S) -> NoneOfBytes<S> {
    NoneOfBytes(set)
}

macro_rules! ascii_class {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name;

        impl Predicate<u8> for $name {
            #[inline]
            fn check(&self, value: &u8) -> bool {
                value.$method()
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate.")]
        pub fn $ctor() -> $name {
            $name
        }
    };
}

ascii_class!(
    /// Accepts `0-9`, `a-f` and `A-F`.
    IsAsciiHexdigit,
    is_ascii_hexdigit,
    is_ascii_hexdigit
);
ascii_class!(
    /// Accepts `0-9`.
    IsAsciiDigit,
    is_ascii_digit,
    is_ascii_digit
);
ascii_class!(
    /// Accepts `a-z` and `A-Z`.
    IsAsciiAlphabetic,
    is_ascii_alphabetic,
    is_ascii_alphabetic
);
ascii_class!(
    /// Accepts `a-z`, `A-Z` and `0-9`.
    IsAsciiAlphanumeric,
    is_ascii_alphanumeric,
    is_ascii_alphanumeric
);
ascii_class!(
    /// Accepts space, tab, line feed, form feed and carriage return.
    IsAsciiWhitespace,
    is_ascii_whitespace,
    is_ascii_whitespace
);

/// Predicate that rejects ASCII whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotWhitespace;

impl Predicate<u8> for NotWhitespace {
    #[inline]
    fn check(&self, value: &u8) -> bool {
        !value.is_ascii_whitespace()
    }
}

/// Create a predicate that rejects ASCII whitespace.
///
/// # Example
///
/// ```rust
/// use sieve::predicate::*;
///
/// assert!(not_whitespace().check(&b'c'));
/// assert!(!not_whitespace().check(&b' '));
/// ```
pub fn not_whitespace() -> NotWhitespace {
    NotWhitespace
}

/// Predicate with a constant answer.
#[derive(Clone, Copy, Debug)]
pub struct Const(pub bool);

impl Predicate<u8> for Const {
    #[inline]
    fn check(&self, _value: &u8) -> bool {
        self.0
    }
}

/// Accept every byte. This is the filter of a view built without one.
pub fn always() -> Const {
    Const(true)
}

/// Reject every byte.
pub fn never() -> Const {
    Const(false)
}
