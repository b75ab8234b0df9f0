//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use sieve::predicate::prelude::*;
//!
//! let visible = not_whitespace().and(one_of(b"c+/"));
//! assert!(visible.check(&b'+'));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

// Type erasure
pub use super::boxed::Filter;

// Byte predicates
pub use super::byte::{
    always, eq, is_ascii_alphabetic, is_ascii_alphanumeric, is_ascii_digit, is_ascii_hexdigit,
    is_ascii_whitespace, never, none_of_bytes, not_whitespace, one_of,
};
