//! # Sieve
//!
//! Lazily-filtered, zero-copy views over borrowed byte strings.
//!
//! A [`FilteredView`] borrows a buffer and a predicate and behaves like the
//! string of the bytes the predicate accepts, without ever building that
//! string. Indexing, length, substrings, splitting, comparison and iteration
//! all work on the filtered ("logical") sequence while the bytes stay where
//! they are.
//!
//! ## Quick Example
//!
//! ```rust
//! use sieve::{split, FilteredView};
//! use sieve::predicate::*;
//!
//! let text = "0xDEADBEEF / 0xdeadbeef / 0xDEAD";
//! let hex_words = FilteredView::with_filter(
//!     text,
//!     is_ascii_hexdigit().and(is_ascii_digit().not()).or(one_of(b" /")),
//! );
//!
//! let pieces = split(&hex_words, &FilteredView::new(" / "));
//! let rendered: Vec<String> = pieces.iter().map(|p| p.to_string()).collect();
//! assert_eq!(rendered, ["DEADBEEF", "deadbeef", "DEAD"]);
//! ```
//!
//! ## Cost model
//!
//! Views cache nothing. `len`, `at` and every comparison rescan the borrowed
//! window through the predicate, so results always match the predicate that
//! is attached. Predicates must therefore be pure and cheap.
//!
//! ## Features
//!
//! - `tracing`: trace events when views are split, cut or composed
//! - `serde`: serialize views as their visible text
//! - `proptest`: strategies for texts and filters in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod iter;
pub mod ops;
pub mod predicate;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
pub mod view;

// Re-exports
pub use error::ViewError;
pub use iter::{Cursor, Direction, Iter};
pub use ops::{compose, split, substr};
pub use predicate::{Filter, Predicate, PredicateExt};
pub use view::FilteredView;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ViewError;
    pub use crate::iter::{Cursor, Direction, Iter};
    pub use crate::ops::{compose, split, substr};
    pub use crate::predicate::prelude::*;
    pub use crate::view::FilteredView;
}
