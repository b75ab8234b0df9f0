//! Walking the visible bytes of a view
//!
//! [`Iter`] is the everyday iterator: it keeps raw front and back cursors
//! into the window and skips rejected bytes as it goes, so each step is
//! amortized O(1). `.rev()` gives the reverse walk.
//!
//! [`Cursor`] is a positional cursor: a logical position plus a direction.
//! Reading it re-walks the view from the start through
//! [`FilteredView::at`], which keeps it valid for any filter without holding
//! raw state. Stepping is unchecked; reading a position outside the view
//! reports [`ViewError::OutOfRange`].

use std::iter::FusedIterator;

use crate::error::ViewError;
use crate::predicate::Predicate;
use crate::view::FilteredView;

/// Iterator over the visible bytes of a [`FilteredView`].
///
/// Created by [`FilteredView::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'v, 'a> {
    view: &'v FilteredView<'a>,
    front: usize,
    back: usize,
}

impl<'v, 'a> Iter<'v, 'a> {
    pub(crate) fn new(view: &'v FilteredView<'a>) -> Self {
        Self {
            view,
            front: 0,
            back: view.data().len(),
        }
    }
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.view.data();
        while self.front < self.back {
            let byte = &bytes[self.front];
            self.front += 1;
            if self.view.predicate().check(byte) {
                return Some(byte);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl DoubleEndedIterator for Iter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let bytes = self.view.data();
        while self.front < self.back {
            self.back -= 1;
            let byte = &bytes[self.back];
            if self.view.predicate().check(byte) {
                return Some(byte);
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_, '_> {}

/// Which way a [`Cursor`] moves when stepped forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Reads the byte at its position; `move_next` increments.
    Forward,
    /// Reads the byte one before its position; `move_next` decrements.
    Reverse,
}

/// A bidirectional cursor over the logical positions of a view.
///
/// Two cursors are equal when they point into the same view (identity, not
/// content) at the same position with the same direction.
///
/// # Example
///
/// ```rust
/// use sieve::FilteredView;
///
/// let view = FilteredView::with_filter("a1b2", |c: &u8| c.is_ascii_digit());
///
/// let mut cursor = view.cursor_start();
/// assert_eq!(cursor.get(), Ok(&b'1'));
/// cursor.move_next();
/// assert_eq!(cursor.get(), Ok(&b'2'));
/// cursor.move_next();
/// assert_eq!(cursor, view.cursor_end());
///
/// let mut rev = view.rev_cursor_start();
/// assert_eq!(rev.get(), Ok(&b'2'));
/// rev.move_next();
/// assert_eq!(rev.get(), Ok(&b'1'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'v, 'a> {
    view: &'v FilteredView<'a>,
    position: usize,
    direction: Direction,
}

impl<'v, 'a> Cursor<'v, 'a> {
    pub(crate) fn new(view: &'v FilteredView<'a>, position: usize, direction: Direction) -> Self {
        Self {
            view,
            position,
            direction,
        }
    }

    /// The byte under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] when the cursor sits outside the
    /// view, e.g. at `cursor_end()` or after stepping past either end.
    pub fn get(&self) -> Result<&'a u8, ViewError> {
        match self.direction {
            Direction::Forward => self.view.at(self.position),
            Direction::Reverse => self.view.at(self.position.wrapping_sub(1)),
        }
    }

    /// Step one byte in the cursor's direction.
    pub fn move_next(&mut self) {
        self.position = match self.direction {
            Direction::Forward => self.position.wrapping_add(1),
            Direction::Reverse => self.position.wrapping_sub(1),
        };
    }

    /// Step one byte against the cursor's direction.
    pub fn move_prev(&mut self) {
        self.position = match self.direction {
            Direction::Forward => self.position.wrapping_sub(1),
            Direction::Reverse => self.position.wrapping_add(1),
        };
    }

    /// The logical position of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The direction the cursor walks.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The view the cursor walks.
    pub fn view(&self) -> &'v FilteredView<'a> {
        self.view
    }
}

impl PartialEq for Cursor<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.view, other.view)
            && self.position == other.position
            && self.direction == other.direction
    }
}

impl Eq for Cursor<'_, '_> {}
