//! Entry points that bring a sequence into a pipeline.

use crate::adaptor::impl_pipe;
use crate::error::Result;
use crate::sequence::{Capabilities, Sequence};

/// Wraps a sequence so it supports `|`.
///
/// Standard containers cannot carry the operator themselves, so a pipeline
/// starts with `seq(container)`, which moves the container in, or
/// `seq(&container)`, which borrows it.
///
/// ```
/// use melbi_seq_core::{seq, to_vec, append};
///
/// let owned = seq(vec![1, 2]) | append(3) | to_vec();
/// assert_eq!(owned, vec![1, 2, 3]);
///
/// let data = vec![1, 2];
/// let borrowed = seq(&data) | append(&3) | to_vec();
/// assert_eq!(borrowed, vec![&1, &2, &3]);
/// ```
pub fn seq<S: Sequence>(source: S) -> Seq<S> {
    Seq(source)
}

/// A sequence wrapped by [`seq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seq<S>(S);

impl<S> Seq<S> {
    pub fn inner(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Sequence> Sequence for Seq<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn begin(&self) -> S::Cursor {
        self.0.begin()
    }

    fn end(&self) -> S::Cursor {
        self.0.end()
    }

    fn value_at(&self, cursor: &S::Cursor) -> Result<S::Item> {
        self.0.value_at(cursor)
    }

    fn advance(&self, cursor: &mut S::Cursor) -> Result<()> {
        self.0.advance(cursor)
    }

    fn retreat(&self, cursor: &mut S::Cursor) -> Result<()> {
        self.0.retreat(cursor)
    }

    fn capabilities(&self) -> Capabilities {
        self.0.capabilities()
    }

    fn size(&self) -> Option<usize> {
        self.0.size()
    }

    fn advance_by(&self, cursor: &mut S::Cursor, n: usize) -> Result<usize> {
        self.0.advance_by(cursor, n)
    }
}

impl_pipe!([S: Sequence] Seq<S>);

/// A shared borrow of a sequence, created by [`Sequence::borrowed`].
///
/// Lets a view be consumed by a terminal operation, or wrapped by another
/// view, without giving it up. Iterating an [`OrderedView`](crate::OrderedView)
/// through several borrows reuses its sorted cache.
#[derive(Debug)]
pub struct Borrowed<'a, S: ?Sized>(&'a S);

impl<'a, S: ?Sized> Borrowed<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        Borrowed(sequence)
    }

    pub fn get(&self) -> &'a S {
        self.0
    }
}

impl<S: ?Sized> Clone for Borrowed<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Borrowed<'_, S> {}

impl<S: Sequence + ?Sized> Sequence for Borrowed<'_, S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn begin(&self) -> S::Cursor {
        self.0.begin()
    }

    fn end(&self) -> S::Cursor {
        self.0.end()
    }

    fn value_at(&self, cursor: &S::Cursor) -> Result<S::Item> {
        self.0.value_at(cursor)
    }

    fn advance(&self, cursor: &mut S::Cursor) -> Result<()> {
        self.0.advance(cursor)
    }

    fn retreat(&self, cursor: &mut S::Cursor) -> Result<()> {
        self.0.retreat(cursor)
    }

    fn capabilities(&self) -> Capabilities {
        self.0.capabilities()
    }

    fn size(&self) -> Option<usize> {
        self.0.size()
    }

    fn advance_by(&self, cursor: &mut S::Cursor, n: usize) -> Result<usize> {
        self.0.advance_by(cursor, n)
    }
}

impl_pipe!(['a, S: Sequence + ?Sized] Borrowed<'a, S>);
