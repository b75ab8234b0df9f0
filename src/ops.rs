//! Operations that derive new views
//!
//! Each function here takes a view by reference and returns new views over
//! the same backing buffer; the input is never modified. Derived views are
//! cut in raw coordinates using
//! [`FilteredView::count_filtered_chars_before`], so they re-filter exactly
//! like their parent, including when composed further.

use crate::predicate::{all_of, Filter};
use crate::view::FilteredView;

/// A view over the same window that shows a byte only if every filter in
/// `filters` accepts it.
///
/// The view's own filter is replaced, not extended. Filters are checked in
/// order and checking stops at the first rejection. An empty list shows
/// every byte.
///
/// # Example
///
/// ```rust
/// use sieve::{compose, FilteredView};
/// use sieve::predicate::*;
///
/// let view = FilteredView::new("c / c++");
/// let composed = compose(
///     &view,
///     [one_of(b"c+/").boxed(), not_whitespace().boxed(), always().boxed()],
/// );
/// assert_eq!(composed.to_string(), "c/c++");
/// ```
pub fn compose<'a, I>(view: &FilteredView<'a>, filters: I) -> FilteredView<'a>
where
    I: IntoIterator<Item = Filter<'a>>,
{
    let combined = all_of(filters);
    #[cfg(feature = "tracing")]
    tracing::trace!(filters = combined.0.len(), "composing filters");
    FilteredView::from_bytes_with_filter(view.data(), combined)
}

/// Split the visible content of `view` on occurrences of the visible
/// content of `token`.
///
/// Matches are found greedily from the left and do not overlap. Every piece
/// shares `view`'s filter. A trailing token produces a trailing empty piece.
/// When the token is empty, the view is empty, or the token is longer than
/// the view, the result is a single clone of `view`.
///
/// # Example
///
/// ```rust
/// use sieve::{split, FilteredView};
///
/// let view = FilteredView::new("xax");
/// let pieces = split(&view, &FilteredView::new("x"));
/// let rendered: Vec<String> = pieces.iter().map(|p| p.to_string()).collect();
/// assert_eq!(rendered, ["", "a", ""]);
/// ```
pub fn split<'a>(view: &FilteredView<'a>, token: &FilteredView<'_>) -> Vec<FilteredView<'a>> {
    let source = view.to_vec();
    let needle = token.to_vec();
    if needle.is_empty() || source.is_empty() || source.len() < needle.len() {
        return vec![view.clone()];
    }

    let mut pieces = Vec::new();
    let mut offset = 0;
    let mut i = 0;
    while i + needle.len() <= source.len() {
        if source[i..i + needle.len()] == needle[..] {
            pieces.push(view.window(offset, i));
            offset = i + needle.len();
            i = offset;
        } else {
            i += 1;
        }
    }
    pieces.push(view.window(offset, source.len()));

    #[cfg(feature = "tracing")]
    tracing::trace!(pieces = pieces.len(), "split filtered view");
    pieces
}

/// The `count` visible bytes of `view` starting at logical position `pos`.
///
/// `count == 0` means "to the end". When `pos` is at or past the end the
/// result is an empty view with the same filter. A `count` reaching past
/// the end stops at the end of the buffer.
///
/// # Example
///
/// ```rust
/// use sieve::{substr, FilteredView};
///
/// let view = FilteredView::new("Siberian Husky");
/// assert_eq!(substr(&view, 9, 0), "Husky");
/// assert_eq!(substr(&view, 0, 8), "Siberian");
/// assert!(substr(&view, 20, 0).is_empty());
/// ```
pub fn substr<'a>(view: &FilteredView<'a>, pos: usize, count: usize) -> FilteredView<'a> {
    let len = view.len();
    if pos >= len {
        return view.window(len, len);
    }
    let count = if count == 0 { len - pos } else { count };

    #[cfg(feature = "tracing")]
    tracing::trace!(pos, count, len, "substr of filtered view");
    view.window(pos, pos.saturating_add(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{
        always, eq, is_ascii_digit, is_ascii_hexdigit, never, not_whitespace, one_of,
        PredicateExt,
    };

    fn rendered(pieces: &[FilteredView<'_>]) -> Vec<String> {
        pieces.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_compose_all_must_accept() {
        let view = FilteredView::new("c / c++");
        let composed = compose(
            &view,
            [
                one_of(b"c+/").boxed(),
                not_whitespace().boxed(),
                always().boxed(),
            ],
        );
        assert_eq!(composed.to_string(), "c/c++");
        assert_eq!(composed.data().as_ptr(), view.data().as_ptr());
        assert_eq!(composed.data().len(), view.data().len());
    }

    #[test]
    fn test_compose_replaces_original_filter() {
        let view = FilteredView::with_filter("abc123", is_ascii_digit());
        let composed = compose(&view, [eq(b'a').boxed()]);
        assert_eq!(composed, "a");
    }

    #[test]
    fn test_compose_empty_list_shows_everything() {
        let view = FilteredView::with_filter("a b", never());
        let composed = view.compose(Vec::new());
        assert_eq!(composed, "a b");
    }

    #[test]
    fn test_compose_order_does_not_matter() {
        let view = FilteredView::new("0xDEAD beef!");
        let p = is_ascii_hexdigit().boxed();
        let q = is_ascii_digit().not().boxed();
        let pq = compose(&view, [p.clone(), q.clone()]);
        let qp = compose(&view, [q, p]);
        assert_eq!(pq, qp);
        assert_eq!(pq, "DEADbeef");
    }

    #[test]
    fn test_split_hex_words() {
        let text = "0xDEADBEEF / 0xdeadbeef / 0xDEAD";
        let view = FilteredView::with_filter(text, |c: &u8| {
            matches!(c, b'A'..=b'F' | b'a'..=b'f' | b' ' | b'/')
        });
        let token = FilteredView::new(" / ");
        let pieces = split(&view, &token);
        assert_eq!(rendered(&pieces), ["DEADBEEF", "deadbeef", "DEAD"]);
        for piece in &pieces {
            assert!(piece.predicate().ptr_eq(view.predicate()));
        }
    }

    #[test]
    fn test_split_leading_and_trailing_token() {
        let view = FilteredView::new("xax");
        let pieces = split(&view, &FilteredView::new("x"));
        assert_eq!(rendered(&pieces), ["", "a", ""]);
    }

    #[test]
    fn test_split_is_non_overlapping() {
        let view = FilteredView::new("aaaa");
        let pieces = view.split(&FilteredView::new("aa"));
        assert_eq!(rendered(&pieces), ["", "", ""]);

        let view = FilteredView::new("aaa");
        let pieces = view.split(&FilteredView::new("aa"));
        assert_eq!(rendered(&pieces), ["", "a"]);
    }

    #[test]
    fn test_split_without_match() {
        let view = FilteredView::new("hello");
        let pieces = split(&view, &FilteredView::new(","));
        assert_eq!(rendered(&pieces), ["hello"]);
    }

    #[test]
    fn test_split_degenerate_inputs_return_source() {
        let view = FilteredView::new("abc");
        let pieces = split(&view, &FilteredView::default());
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].data().as_ptr(), view.data().as_ptr());

        let pieces = split(&view, &FilteredView::new("abcd"));
        assert_eq!(rendered(&pieces), ["abc"]);

        let empty = FilteredView::with_filter("abc", never());
        let pieces = split(&empty, &FilteredView::new("a"));
        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].is_empty());
    }

    #[test]
    fn test_split_token_matched_on_visible_content() {
        // The token itself is filtered: visible ", " becomes ",".
        let view = FilteredView::with_filter("a, b,  c", not_whitespace());
        let token = FilteredView::with_filter(", ", not_whitespace());
        let pieces = split(&view, &token);
        assert_eq!(rendered(&pieces), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_pieces_compose_further() {
        let view = FilteredView::with_filter("ab_1|cd_2", eq(b'_').not());
        let pieces = split(&view, &FilteredView::new("|"));
        let digits: Vec<String> = pieces
            .iter()
            .map(|p| p.compose([is_ascii_digit().boxed()]).to_string())
            .collect();
        assert_eq!(digits, ["1", "2"]);
    }

    #[test]
    fn test_substr_to_end() {
        let view = FilteredView::new("Siberian Husky");
        assert_eq!(substr(&view, 9, 0).to_string(), "Husky");
    }

    #[test]
    fn test_substr_past_end_is_empty() {
        let view = FilteredView::new("Siberian Husky");
        let sub = substr(&view, 20, 0);
        assert!(sub.is_empty());
        assert_eq!(sub.to_string(), "");
        assert!(sub.predicate().ptr_eq(view.predicate()));
        assert!(substr(&view, 14, 3).is_empty());
    }

    #[test]
    fn test_substr_with_filter() {
        let view = FilteredView::with_filter("a-b-c-d-e", eq(b'-').not());
        let sub = view.substr(1, 3);
        assert_eq!(sub, "bcd");
        assert_eq!(sub.len(), 3);
        assert!(sub.predicate().ptr_eq(view.predicate()));
    }

    #[test]
    fn test_substr_count_past_end_stops_at_buffer_end() {
        let view = FilteredView::with_filter("a-b-c", eq(b'-').not());
        assert_eq!(view.substr(1, 100), "bc");
        assert_eq!(view.substr(2, usize::MAX), "c");
    }

    #[test]
    fn test_substr_shares_buffer() {
        let text = "0123456789";
        let view = FilteredView::new(text);
        let sub = view.substr(3, 2);
        assert_eq!(sub.data().as_ptr(), text.as_bytes()[3..].as_ptr());
        assert_eq!(sub, "34");
    }
}
