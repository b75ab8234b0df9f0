//! The filtered view itself
//!
//! A [`FilteredView`] borrows a byte buffer and exposes only the bytes its
//! filter accepts. Nothing is copied and nothing is cached: every query
//! (`len`, `at`, comparison, rendering) scans the borrowed window through
//! the filter again, so the answer always agrees with the filter attached
//! right now.
//!
//! Two coordinate spaces are in play:
//! - raw offsets count every byte of the window
//! - logical offsets count only accepted bytes
//!
//! [`FilteredView::count_filtered_chars_before`] translates between them and
//! is what derived views (substrings, split pieces) are cut with.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::error::ViewError;
use crate::iter::{Cursor, Direction, Iter};
use crate::ops;
use crate::predicate::{Filter, Predicate};

/// A non-owning view over the bytes of a buffer that satisfy a filter.
///
/// The view holds the borrowed raw window and a shared [`Filter`]. Cloning
/// shares both. The buffer must outlive the view, which the lifetime `'a`
/// enforces: a view over a temporary that is dropped first will not compile.
/// The filter lives for `'a` too, so it may borrow local data.
///
/// # Example
///
/// ```rust
/// use sieve::FilteredView;
///
/// let view = FilteredView::with_filter("cat", |c: &u8| *c == b'a');
/// assert_eq!(view.len(), 1);
/// assert_eq!(view.at(0), Ok(&b'a'));
/// assert!(view.at(1).is_err());
/// assert_eq!(view.to_string(), "a");
/// ```
#[derive(Clone)]
pub struct FilteredView<'a> {
    bytes: &'a [u8],
    filter: Filter<'a>,
}

impl<'a> FilteredView<'a> {
    /// Create a view over `text` that shows every byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::FilteredView;
    ///
    /// let view = FilteredView::new("cat");
    /// assert_eq!(view.len(), 3);
    /// ```
    pub fn new(text: &'a str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a view over raw bytes that shows every byte.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::with_shared_filter(bytes, Filter::always())
    }

    /// Create a view over `text` showing only bytes accepted by `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::FilteredView;
    /// use sieve::predicate::is_ascii_digit;
    ///
    /// let view = FilteredView::with_filter("a1b2c3", is_ascii_digit());
    /// assert_eq!(view, "123");
    /// ```
    pub fn with_filter<P>(text: &'a str, predicate: P) -> Self
    where
        P: Predicate<u8> + 'a,
    {
        Self::from_bytes_with_filter(text.as_bytes(), predicate)
    }

    /// Create a view over raw bytes showing only bytes accepted by `predicate`.
    pub fn from_bytes_with_filter<P>(bytes: &'a [u8], predicate: P) -> Self
    where
        P: Predicate<u8> + 'a,
    {
        Self::with_shared_filter(bytes, Filter::new(predicate))
    }

    /// Create a view from a raw window and an already boxed filter.
    ///
    /// The filter is shared, not copied.
    pub fn with_shared_filter(bytes: &'a [u8], filter: Filter<'a>) -> Self {
        Self { bytes, filter }
    }

    /// The `index`-th visible byte, counting from zero.
    ///
    /// Scans from the start of the window on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&'a u8, ViewError> {
        match self.iter().nth(index) {
            Some(byte) => Ok(byte),
            None => {
                let len = self.len();
                #[cfg(feature = "tracing")]
                tracing::debug!(index, len, "filtered view lookup out of range");
                Err(ViewError::out_of_range(index, len))
            }
        }
    }

    /// Number of visible bytes. Recomputed by a full scan on every call.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no byte of the window passes the filter.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The raw, unfiltered window this view scans.
    ///
    /// The visible content does not necessarily start at the first byte.
    /// Compare `data().as_ptr()` to check whether two views share a buffer.
    pub fn data(&self) -> &'a [u8] {
        self.bytes
    }

    /// The filter deciding which bytes are visible.
    pub fn predicate(&self) -> &Filter<'a> {
        &self.filter
    }

    /// Copy the visible bytes into a new buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().copied().collect()
    }

    /// Copy the visible bytes into a `String`, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_vec()).into_owned()
    }

    /// Number of rejected bytes passed while walking to the `index`-th
    /// acceptance.
    ///
    /// The walk advances one raw byte at a time and stops once `index` bytes
    /// have been accepted (or the window ends). The raw offset of logical
    /// cursor `index` is therefore `index + count_filtered_chars_before(index)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::FilteredView;
    ///
    /// let view = FilteredView::with_filter("a-b--c", |c: &u8| *c != b'-');
    /// assert_eq!(view.count_filtered_chars_before(0), 0);
    /// assert_eq!(view.count_filtered_chars_before(2), 1);
    /// assert_eq!(view.count_filtered_chars_before(3), 3);
    /// ```
    pub fn count_filtered_chars_before(&self, index: usize) -> usize {
        let mut accepted = 0;
        let mut rejected = 0;
        for byte in self.bytes {
            if accepted == index {
                break;
            }
            if self.filter.check(byte) {
                accepted += 1;
            } else {
                rejected += 1;
            }
        }
        rejected
    }

    /// Raw offset just past the `logical`-th accepted byte, clamped to the
    /// window.
    pub(crate) fn raw_offset(&self, logical: usize) -> usize {
        logical
            .saturating_add(self.count_filtered_chars_before(logical))
            .min(self.bytes.len())
    }

    /// A derived view over logical range `[start, end)` sharing this filter.
    pub(crate) fn window(&self, start: usize, end: usize) -> FilteredView<'a> {
        let raw_start = self.raw_offset(start);
        let raw_end = self.raw_offset(end).max(raw_start);
        Self::with_shared_filter(&self.bytes[raw_start..raw_end], self.filter.clone())
    }

    /// Iterate over the visible bytes, front to back or back to front.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve::FilteredView;
    ///
    /// let view = FilteredView::with_filter("c / c++", |c: &u8| *c != b' ');
    /// let reversed: Vec<u8> = view.iter().rev().copied().collect();
    /// assert_eq!(reversed, b"++c/c");
    /// ```
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter::new(self)
    }

    /// Cursor at the first visible byte.
    pub fn cursor_start(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, 0, Direction::Forward)
    }

    /// Cursor one past the last visible byte.
    pub fn cursor_end(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, self.len(), Direction::Forward)
    }

    /// Reverse cursor at the last visible byte.
    pub fn rev_cursor_start(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, self.len(), Direction::Reverse)
    }

    /// Reverse cursor one before the first visible byte.
    pub fn rev_cursor_end(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, 0, Direction::Reverse)
    }

    /// See [`ops::substr`].
    pub fn substr(&self, pos: usize, count: usize) -> FilteredView<'a> {
        ops::substr(self, pos, count)
    }

    /// See [`ops::split`].
    pub fn split(&self, token: &FilteredView<'_>) -> Vec<FilteredView<'a>> {
        ops::split(self, token)
    }

    /// See [`ops::compose`].
    pub fn compose<I>(&self, filters: I) -> FilteredView<'a>
    where
        I: IntoIterator<Item = Filter<'a>>,
    {
        ops::compose(self, filters)
    }
}

impl Default for FilteredView<'_> {
    fn default() -> Self {
        FilteredView::from_bytes(&[])
    }
}

impl<'a> From<&'a str> for FilteredView<'a> {
    fn from(text: &'a str) -> Self {
        FilteredView::new(text)
    }
}

impl<'a> From<&'a String> for FilteredView<'a> {
    fn from(text: &'a String) -> Self {
        FilteredView::new(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for FilteredView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        FilteredView::from_bytes(bytes)
    }
}

impl From<&FilteredView<'_>> for Vec<u8> {
    fn from(view: &FilteredView<'_>) -> Self {
        view.to_vec()
    }
}

impl<'v, 'a> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a u8;
    type IntoIter = Iter<'v, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for FilteredView<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(byte) => byte,
            Err(err) => panic!("{}", err),
        }
    }
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for FilteredView<'_> {}

impl PartialEq<str> for FilteredView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.as_bytes().iter())
    }
}

impl PartialEq<&str> for FilteredView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<[u8]> for FilteredView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl PartialOrd for FilteredView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilteredView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for FilteredView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_vec().hash(state);
    }
}

impl fmt::Display for FilteredView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&String::from_utf8_lossy(&self.to_vec()))
    }
}

impl fmt::Debug for FilteredView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView")
            .field("visible", &self.to_string_lossy())
            .field("raw_len", &self.bytes.len())
            .finish()
    }
}
