//! Property-based tests for filtered views

use proptest::prelude::*;
use sieve::predicate::{Filter, Predicate};
use sieve::testing::{filter, text};
use sieve::{compose, split, substr, FilteredView};

fn filtered<'a>(s: &'a str, f: &Filter<'a>) -> FilteredView<'a> {
    FilteredView::with_shared_filter(s.as_bytes(), f.clone())
}

proptest! {
    #[test]
    fn prop_at_returns_accepted_byte_at_logical_position(
        s in text(),
        f in filter()
    ) {
        let view = filtered(&s, &f);
        for i in 0..view.len() {
            let byte = view.at(i).unwrap();
            prop_assert!(f.check(byte));

            let raw = byte as *const u8 as usize - s.as_ptr() as usize;
            let accepted_through = s.as_bytes()[..=raw].iter().filter(|&b| f.check(b)).count();
            prop_assert_eq!(accepted_through, i + 1);
        }
    }

    #[test]
    fn prop_at_boundary(s in text(), f in filter()) {
        let view = filtered(&s, &f);
        let n = view.len();
        prop_assert!(view.at(n).unwrap_err().is_out_of_range());
        prop_assert!(view.at(n + 1).is_err());
        if n > 0 {
            prop_assert!(view.at(n - 1).is_ok());
        }
    }

    #[test]
    fn prop_len_matches_iteration(s in text(), f in filter()) {
        let view = filtered(&s, &f);
        prop_assert_eq!(view.len(), view.iter().count());
        prop_assert_eq!(view.len(), view.iter().rev().count());
        prop_assert_eq!(view.is_empty(), view.len() == 0);
    }

    #[test]
    fn prop_to_vec_is_idempotent(s in text(), f in filter()) {
        let owned = filtered(&s, &f).to_vec();
        let again = FilteredView::from_bytes(&owned).to_vec();
        prop_assert_eq!(again, owned);
    }

    #[test]
    fn prop_compose_order_independent(
        s in text(),
        p in filter(),
        q in filter()
    ) {
        let view = FilteredView::new(&s);
        let pq = compose(&view, [p.clone(), q.clone()]);
        let qp = compose(&view, [q, p]);
        prop_assert_eq!(pq.to_vec(), qp.to_vec());
    }

    #[test]
    fn prop_split_join_reconstructs(
        s in text(),
        f in filter(),
        token in "[ab x/]{1,2}"
    ) {
        let view = filtered(&s, &f);
        let tok = FilteredView::new(&token);
        let pieces = split(&view, &tok);
        if tok.len() > view.len() {
            prop_assert_eq!(pieces.len(), 1);
            prop_assert_eq!(&pieces[0], &view);
            return Ok(());
        }

        let joined = pieces
            .iter()
            .map(|p| p.to_vec())
            .collect::<Vec<_>>()
            .join(token.as_bytes());
        prop_assert_eq!(joined, view.to_vec());
    }

    #[test]
    fn prop_split_pieces_share_buffer(s in text(), f in filter()) {
        let view = filtered(&s, &f);
        let range = s.as_bytes().as_ptr_range();
        for piece in split(&view, &FilteredView::new("/")) {
            let start = piece.data().as_ptr();
            prop_assert!(range.contains(&start) || start == range.end);
            prop_assert!(piece.predicate().ptr_eq(&f));
        }
    }

    #[test]
    fn prop_substr_past_end_is_empty(
        s in text(),
        f in filter(),
        extra in 0usize..8,
        count in 0usize..8
    ) {
        let view = filtered(&s, &f);
        let sub = substr(&view, view.len() + extra, count);
        prop_assert!(sub.is_empty());
    }

    #[test]
    fn prop_substr_matches_slice(
        s in text(),
        f in filter(),
        pos in 0usize..30,
        count in 0usize..30
    ) {
        let view = filtered(&s, &f);
        let visible = view.to_vec();
        if pos >= visible.len() {
            prop_assert!(substr(&view, pos, count).is_empty());
            return Ok(());
        }

        let end = if count == 0 { visible.len() } else { (pos + count).min(visible.len()) };
        prop_assert_eq!(substr(&view, pos, count).to_vec(), visible[pos..end].to_vec());
    }

    #[test]
    fn prop_ordering_matches_visible_bytes(
        a in text(),
        b in text(),
        f in filter()
    ) {
        let va = filtered(&a, &f);
        let vb = filtered(&b, &f);
        prop_assert_eq!(va.cmp(&vb), va.to_vec().cmp(&vb.to_vec()));
        prop_assert_eq!(va == vb, va.to_vec() == vb.to_vec());
    }

    #[test]
    fn prop_count_filtered_chars_before_translates(
        s in text(),
        f in filter()
    ) {
        let view = filtered(&s, &f);
        for n in 1..=view.len() {
            let raw_end = n + view.count_filtered_chars_before(n);
            let accepted = s.as_bytes()[..raw_end].iter().filter(|&b| f.check(b)).count();
            prop_assert_eq!(accepted, n);
            prop_assert!(f.check(&s.as_bytes()[raw_end - 1]));
        }
    }
}
