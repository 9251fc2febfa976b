//! The cursor protocol shared by every sequence.
//!
//! A [`Sequence`] hands out cursors, plain position values that do not borrow
//! the sequence. Every operation on a cursor goes through the sequence that
//! created it:
//!
//! ```text
//! let mut cursor = seq.begin();
//! while cursor != seq.end() {
//!     let item = seq.value_at(&cursor)?;
//!     seq.advance(&mut cursor)?;
//! }
//! ```
//!
//! Reverse traversal and known length are optional. They are reported at
//! runtime through [`Sequence::capabilities`], so a view can forward exactly the
//! capabilities of the sequences it wraps and a terminal operation can pick the
//! cheapest strategy available.

use core::{fmt::Debug, iter::FusedIterator};

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::views::Borrowed;

pub(crate) const DEREF_END: &str = "cannot dereference the end cursor";
pub(crate) const ADVANCE_END: &str = "cannot advance past the end";
pub(crate) const RETREAT_BEGIN: &str = "cannot retreat before the beginning";

bitflags! {
    /// Optional capabilities of a sequence.
    ///
    /// Views compute their own flags from the flags of their sources, so the
    /// set can differ between two instances of the same generic view type.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Capabilities: u8 {
        /// `size()` reports the element count without walking the sequence.
        const SIZED = 1;
        /// `retreat()` moves a cursor one position backward.
        const BIDIRECTIONAL = 1 << 1;
    }
}

static_assertions::assert_impl_all!(Capabilities: Copy, Send, Sync);

/// An ordered, re-iterable sequence of items addressed by cursors.
///
/// Cursor equality is only meaningful between cursors of the same sequence
/// instance. `value_at` must succeed for every cursor in `[begin, end)`; the
/// iterator helpers treat a failure there as a bug in the implementation.
pub trait Sequence {
    /// The value produced by dereferencing a cursor.
    type Item;

    /// A position within this sequence.
    type Cursor: Clone + PartialEq + Debug;

    /// Cursor at the first element, equal to `end()` when the sequence is empty.
    fn begin(&self) -> Self::Cursor;

    /// Cursor one past the last element.
    fn end(&self) -> Self::Cursor;

    /// Reads the element at `cursor`.
    ///
    /// Fails with [`Error::OutOfRange`] when `cursor` is the end cursor.
    fn value_at(&self, cursor: &Self::Cursor) -> Result<Self::Item>;

    /// Moves `cursor` one element forward.
    ///
    /// Fails with [`Error::OutOfRange`] when `cursor` is the end cursor.
    fn advance(&self, cursor: &mut Self::Cursor) -> Result<()>;

    /// Moves `cursor` one element backward.
    ///
    /// Fails with [`Error::NotBidirectional`] unless the sequence reports
    /// [`Capabilities::BIDIRECTIONAL`], and with [`Error::OutOfRange`] when
    /// `cursor` is the begin cursor.
    fn retreat(&self, cursor: &mut Self::Cursor) -> Result<()> {
        let _ = cursor;
        Err(Error::NotBidirectional)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Number of elements, when known without walking the sequence.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Advances `cursor` up to `n` times, stopping at the end.
    ///
    /// Returns the number of steps that could not be taken.
    fn advance_by(&self, cursor: &mut Self::Cursor, n: usize) -> Result<usize> {
        let end = self.end();
        let mut remaining = n;
        while remaining > 0 && *cursor != end {
            self.advance(cursor)?;
            remaining -= 1;
        }
        Ok(remaining)
    }

    /// Retreats `cursor` exactly `n` times.
    fn retreat_by(&self, cursor: &mut Self::Cursor, n: usize) -> Result<()> {
        for _ in 0..n {
            self.retreat(cursor)?;
        }
        Ok(())
    }

    fn is_sized(&self) -> bool {
        self.capabilities().contains(Capabilities::SIZED)
    }

    fn is_bidirectional(&self) -> bool {
        self.capabilities().contains(Capabilities::BIDIRECTIONAL)
    }

    fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Iterates the items front to back.
    fn items(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Iterates the items back to front, or `None` without reverse traversal.
    fn rev_items(&self) -> Option<RevIter<'_, Self>> {
        self.is_bidirectional().then(|| RevIter::new(self))
    }

    /// Borrows the sequence so it can enter a pipeline without being moved.
    fn borrowed(&self) -> Borrowed<'_, Self> {
        Borrowed::new(self)
    }
}

/// Forward iterator over a [`Sequence`], created by [`Sequence::items`].
pub struct Iter<'a, S: Sequence + ?Sized> {
    sequence: &'a S,
    cursor: S::Cursor,
    end: S::Cursor,
    remaining: Option<usize>,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    fn new(sequence: &'a S) -> Self {
        Self {
            cursor: sequence.begin(),
            end: sequence.end(),
            remaining: sequence.size(),
            sequence,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for Iter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self
            .sequence
            .value_at(&self.cursor)
            .expect("Bug: cursor before the end failed to dereference");
        self.sequence
            .advance(&mut self.cursor)
            .expect("Bug: cursor before the end failed to advance");
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) if self.cursor != self.end => (n, Some(n)),
            Some(_) => (0, Some(0)),
            None => (0, None),
        }
    }
}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

/// Reverse iterator over a bidirectional [`Sequence`], created by
/// [`Sequence::rev_items`].
pub struct RevIter<'a, S: Sequence + ?Sized> {
    sequence: &'a S,
    cursor: S::Cursor,
    begin: S::Cursor,
}

impl<'a, S: Sequence + ?Sized> RevIter<'a, S> {
    fn new(sequence: &'a S) -> Self {
        Self {
            cursor: sequence.end(),
            begin: sequence.begin(),
            sequence,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for RevIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.cursor == self.begin {
            return None;
        }
        self.sequence
            .retreat(&mut self.cursor)
            .expect("Bug: cursor after the beginning failed to retreat");
        let item = self
            .sequence
            .value_at(&self.cursor)
            .expect("Bug: cursor before the end failed to dereference");
        Some(item)
    }
}

impl<S: Sequence + ?Sized> FusedIterator for RevIter<'_, S> {}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
