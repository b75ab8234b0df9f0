//! Serde support for filtered views (feature-gated)
//!
//! A view serializes as the string of its visible bytes. Deserializing
//! borrows the input text and shows every byte, so it needs a format that
//! can hand out borrowed strings (for `serde_json`, input without escapes).
//!
//! # Example
//!
//! ```rust
//! use sieve::FilteredView;
//! use sieve::predicate::not_whitespace;
//!
//! let view = FilteredView::with_filter("c / c++", not_whitespace());
//! assert_eq!(serde_json::to_string(&view).unwrap(), r#""c/c++""#);
//!
//! let parsed: FilteredView = serde_json::from_str(r#""cat""#).unwrap();
//! assert_eq!(parsed, "cat");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::view::FilteredView;

impl Serialize for FilteredView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de: 'a, 'a> Deserialize<'de> for FilteredView<'a> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <&'de str>::deserialize(deserializer)?;
        Ok(FilteredView::new(text))
    }
}
