//! Operations that pick a single element: by position, first or last.

use crate::adaptor::Adaptor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;

// ============================================================================
// ElementAt
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ElementAt {
    position: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ElementAtOrNone {
    position: usize,
}

/// The element at zero-based `position`, or [`Error::OutOfRange`] when the
/// sequence is shorter.
pub fn element_at(position: usize) -> ElementAt {
    ElementAt { position }
}

/// Like [`element_at`], with `None` instead of an error.
pub fn element_at_or_none(position: usize) -> ElementAtOrNone {
    ElementAtOrNone { position }
}

/// Cursor at `position`, unless the sequence ends first.
fn seek<S: Sequence>(source: &S, position: usize) -> Result<Option<S::Cursor>> {
    let mut cursor = source.begin();
    let missing = source.advance_by(&mut cursor, position)?;
    if missing > 0 || cursor == source.end() {
        return Ok(None);
    }
    Ok(Some(cursor))
}

impl<S: Sequence> Adaptor<S> for ElementAt {
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        match seek(&source, self.position)? {
            Some(cursor) => source.value_at(&cursor),
            None => Err(Error::OutOfRange("position is past the end")),
        }
    }
}

impl<S: Sequence> Adaptor<S> for ElementAtOrNone {
    type Output = Option<S::Item>;

    fn apply(self, source: S) -> Option<S::Item> {
        let cursor = seek(&source, self.position).ok()??;
        source.value_at(&cursor).ok()
    }
}

// ============================================================================
// First
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct First;

#[derive(Debug, Clone, Copy)]
pub struct FirstOrNone;

#[derive(Debug, Clone, Copy)]
pub struct FirstWhere<P>(P);

#[derive(Debug, Clone, Copy)]
pub struct FirstWhereOrNone<P>(P);

/// The first element, or [`Error::EmptySequence`].
pub fn first() -> First {
    First
}

/// The first element, or `None` when the sequence is empty.
pub fn first_or_none() -> FirstOrNone {
    FirstOrNone
}

/// The first element matching `predicate`, or [`Error::ItemNotFound`].
pub fn first_where<P>(predicate: P) -> FirstWhere<P> {
    FirstWhere(predicate)
}

/// The first element matching `predicate`, or `None`.
pub fn first_where_or_none<P>(predicate: P) -> FirstWhereOrNone<P> {
    FirstWhereOrNone(predicate)
}

impl<S: Sequence> Adaptor<S> for First {
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        source.items().next().ok_or(Error::EmptySequence)
    }
}

impl<S: Sequence> Adaptor<S> for FirstOrNone {
    type Output = Option<S::Item>;

    fn apply(self, source: S) -> Option<S::Item> {
        source.items().next()
    }
}

impl<S, P> Adaptor<S> for FirstWhere<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        source.items().find(self.0).ok_or(Error::ItemNotFound)
    }
}

impl<S, P> Adaptor<S> for FirstWhereOrNone<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Option<S::Item>;

    fn apply(self, source: S) -> Option<S::Item> {
        source.items().find(self.0)
    }
}

// ============================================================================
// Last
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Last;

#[derive(Debug, Clone, Copy)]
pub struct LastOrNone;

#[derive(Debug, Clone, Copy)]
pub struct LastWhere<P>(P);

#[derive(Debug, Clone, Copy)]
pub struct LastWhereOrNone<P>(P);

/// The last element, or [`Error::EmptySequence`].
///
/// Bidirectional sequences are read from the back; others are walked in full.
pub fn last() -> Last {
    Last
}

/// The last element, or `None` when the sequence is empty.
pub fn last_or_none() -> LastOrNone {
    LastOrNone
}

/// The last element matching `predicate`, or [`Error::ItemNotFound`].
pub fn last_where<P>(predicate: P) -> LastWhere<P> {
    LastWhere(predicate)
}

/// The last element matching `predicate`, or `None`.
pub fn last_where_or_none<P>(predicate: P) -> LastWhereOrNone<P> {
    LastWhereOrNone(predicate)
}

/// Last element accepted by `predicate`, searching from the back when possible.
fn find_last<S, P>(source: &S, mut predicate: P) -> Option<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    match source.rev_items() {
        Some(mut rev) => rev.find(&mut predicate),
        None => {
            tracing::trace!("sequence is not bidirectional, scanning forward for the last element");
            source.items().filter(&mut predicate).last()
        }
    }
}

impl<S: Sequence> Adaptor<S> for Last {
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        find_last(&source, |_| true).ok_or(Error::EmptySequence)
    }
}

impl<S: Sequence> Adaptor<S> for LastOrNone {
    type Output = Option<S::Item>;

    fn apply(self, source: S) -> Option<S::Item> {
        find_last(&source, |_| true)
    }
}

impl<S, P> Adaptor<S> for LastWhere<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        find_last(&source, self.0).ok_or(Error::ItemNotFound)
    }
}

impl<S, P> Adaptor<S> for LastWhereOrNone<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Option<S::Item>;

    fn apply(self, source: S) -> Option<S::Item> {
        find_last(&source, self.0)
    }
}

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;
