//! Error types for view lookups.

use std::fmt;

/// Error returned when a logical index does not name a visible byte.
///
/// Always caused by the caller asking past the filtered length; it is
/// reported at the offending call and never clamped.
///
/// # Examples
///
/// ```rust
/// use sieve::{FilteredView, ViewError};
///
/// let view = FilteredView::with_filter("cat", |c: &u8| *c == b'a');
/// match view.at(1) {
///     Err(ViewError::OutOfRange { index, len }) => {
///         assert_eq!(index, 1);
///         assert_eq!(len, 1);
///     }
///     Ok(_) => panic!("Expected out-of-range"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The requested logical index is at or beyond the filtered length.
    OutOfRange {
        /// The logical index that was requested.
        index: usize,
        /// The filtered length of the view at the time of the request.
        len: usize,
    },
}

impl ViewError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Returns true if this is an out-of-range error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// The logical index that caused the error.
    pub fn index(&self) -> usize {
        match self {
            Self::OutOfRange { index, .. } => *index,
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                f,
                "filtered view index {} out of range for length {}",
                index, len
            ),
        }
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ViewError::out_of_range(4, 2);
        let display = format!("{}", err);
        assert!(display.contains("index 4"));
        assert!(display.contains("length 2"));
    }

    #[test]
    fn test_out_of_range_accessors() {
        let err = ViewError::out_of_range(7, 0);
        assert!(err.is_out_of_range());
        assert_eq!(err.index(), 7);
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ViewError::out_of_range(0, 0));
    }
}
