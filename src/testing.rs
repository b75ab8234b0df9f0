//! Testing utilities and helpers for filtered views
//!
//! Assertion macros for the two things view tests check most: what a view
//! renders and whether a lookup ran out of range. With the `proptest`
//! feature enabled this module also provides strategies for generating
//! texts and filters.
//!
//! # Examples
//!
//! ```rust
//! use sieve::{assert_out_of_range, assert_renders, FilteredView};
//!
//! let view = FilteredView::with_filter("cat", |c: &u8| *c == b'a');
//! assert_renders!(view, "a");
//! assert_out_of_range!(view.at(1), 1);
//! ```

/// Assert that a view renders exactly the expected text.
///
/// # Example
///
/// ```rust
/// use sieve::{assert_renders, FilteredView};
///
/// assert_renders!(FilteredView::new("dog").substr(1, 0), "og");
/// ```
#[macro_export]
macro_rules! assert_renders {
    ($view:expr, $expected:expr) => {
        match (&$view, $expected) {
            (view, expected) => {
                let rendered = ::std::string::ToString::to_string(view);
                if rendered != expected {
                    panic!(
                        "Expected view to render {:?}, got {:?}",
                        expected, rendered
                    );
                }
            }
        }
    };
}

/// Assert that a lookup failed with an out-of-range error for `index`.
///
/// # Example
///
/// ```rust
/// use sieve::{assert_out_of_range, FilteredView};
///
/// let view = FilteredView::new("ab");
/// assert_out_of_range!(view.at(2), 2);
/// ```
#[macro_export]
macro_rules! assert_out_of_range {
    ($result:expr, $index:expr) => {
        match $result {
            Err($crate::ViewError::OutOfRange { index, .. }) => {
                assert_eq!(index, $index, "out-of-range error for the wrong index");
            }
            Ok(v) => {
                panic!("Expected OutOfRange, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::predicate::{
    always, eq, is_ascii_alphanumeric, is_ascii_digit, never, not_whitespace, Filter, Not,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Short texts over a small alphabet, so filters and tokens hit often.
#[cfg(feature = "proptest")]
pub fn text() -> BoxedStrategy<String> {
    "[ab x/0-9]{0,24}".boxed()
}

/// A filter drawn from a fixed set of byte classes.
#[cfg(feature = "proptest")]
pub fn filter() -> BoxedStrategy<Filter<'static>> {
    prop_oneof![
        Just(Filter::new(always())),
        Just(Filter::new(never())),
        Just(Filter::new(not_whitespace())),
        Just(Filter::new(is_ascii_digit())),
        Just(Filter::new(is_ascii_alphanumeric())),
        Just(Filter::new(Not(eq(b'x')))),
    ]
    .boxed()
}
