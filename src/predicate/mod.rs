//! Predicate combinators for building view filters
//!
//! A view decides which bytes of its buffer are visible through a
//! [`Predicate<u8>`]. This module provides the trait, the logical
//! combinators that compose predicates (`and`, `or`, `not`, `all_of`,
//! `any_of`, `none_of`), a set of ready-made byte classes, and the shared
//! [`Filter`] handle a view stores.
//!
//! Any `Fn(&u8) -> bool + Send + Sync` closure is already a predicate.
//!
//! # Example
//!
//! ```rust
//! use sieve::predicate::*;
//!
//! let hex_or_separator = is_ascii_hexdigit().or(one_of(b" /"));
//! assert!(hex_or_separator.check(&b'D'));
//! assert!(hex_or_separator.check(&b'/'));
//! assert!(!hex_or_separator.check(&b'x'));
//!
//! let filter: Filter = hex_or_separator.boxed();
//! assert!(filter.check(&b' '));
//! ```

mod boxed;
mod byte;
mod combinators;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Re-export type erasure
pub use boxed::{BoxedPredicate, Filter};

// Re-export byte predicates
pub use byte::{
    always, eq, is_ascii_alphabetic, is_ascii_alphanumeric, is_ascii_digit, is_ascii_hexdigit,
    is_ascii_whitespace, never, none_of_bytes, not_whitespace, one_of, Const, Eq,
    IsAsciiAlphabetic, IsAsciiAlphanumeric, IsAsciiDigit, IsAsciiHexdigit, IsAsciiWhitespace,
    NoneOfBytes, NotWhitespace, OneOf,
};
