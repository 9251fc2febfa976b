use alloc::vec::Vec;
use core::cmp::Ordering;

use once_cell::unsync::OnceCell;

use crate::adaptor::impl_pipe;
use crate::error::{Error, Result};
use crate::sequence::{ADVANCE_END, Capabilities, DEREF_END, RETREAT_BEGIN, Sequence};

/// Orders two keys.
///
/// Implemented by [`Ascending`], [`Descending`] and any
/// `Fn(&K, &K) -> Ordering` closure.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Smallest key first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

/// Largest key first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<K: Ord + ?Sized> Comparator<K> for Ascending {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: Ord + ?Sized> Comparator<K> for Descending {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Maps an element to the key it is ordered or compared by.
///
/// Implemented by [`Identity`] and any `Fn(&T) -> K` closure.
pub trait Projection<T> {
    type Key;

    fn project(&self, item: &T) -> Self::Key;
}

/// The element is its own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> Projection<T> for Identity {
    type Key = T;

    fn project(&self, item: &T) -> T {
        item.clone()
    }
}

impl<T, K, F> Projection<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    fn project(&self, item: &T) -> K {
        self(item)
    }
}

/// A source presented in sorted order, without touching the source itself.
///
/// Sorting is lazy and happens once. The first `begin()` or `end()` copies
/// every source element into an internal buffer and stable-sorts it by
/// `comparator(projection(a), projection(b))`; every later cursor request on
/// the same instance reuses that buffer, so the source is read exactly once
/// no matter how often the view is iterated. The buffer lives in an
/// initialize-once cell and is never refreshed: changes made to a borrowed
/// source after the first traversal are not observed.
///
/// The cell is not thread-safe, so the view is `!Sync`.
///
/// ```
/// use melbi_seq_core::{Sequence, order_by_descending, seq, to_vec};
///
/// let words = seq(vec!["kiwi", "fig", "banana"]) | order_by_descending(|w: &&str| w.len());
/// assert_eq!(words.borrowed() | to_vec(), vec!["banana", "kiwi", "fig"]);
/// assert!(words.is_materialized());
/// ```
pub struct OrderedView<S: Sequence, C, P> {
    source: S,
    comparator: C,
    projection: P,
    sorted: OnceCell<Vec<S::Item>>,
}

impl<S, C, P> OrderedView<S, C, P>
where
    S: Sequence,
    P: Projection<S::Item>,
    C: Comparator<P::Key>,
{
    pub fn new(source: S, comparator: C, projection: P) -> Self {
        Self {
            source,
            comparator,
            projection,
            sorted: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the sorted buffer has been built.
    pub fn is_materialized(&self) -> bool {
        self.sorted.get().is_some()
    }

    /// The sorted elements, materializing them on first use.
    pub fn as_slice(&self) -> &[S::Item] {
        self.sorted.get_or_init(|| {
            let mut keyed: Vec<(P::Key, S::Item)> = self
                .source
                .items()
                .map(|item| (self.projection.project(&item), item))
                .collect();
            // `sort_by` is stable: equal keys keep their source order.
            keyed.sort_by(|(a, _), (b, _)| self.comparator.compare(a, b));
            tracing::debug!(len = keyed.len(), "materialized ordered view");
            keyed.into_iter().map(|(_, item)| item).collect()
        })
    }
}

impl<S, C, P> Clone for OrderedView<S, C, P>
where
    S: Sequence + Clone,
    S::Item: Clone,
    C: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparator: self.comparator.clone(),
            projection: self.projection.clone(),
            sorted: self.sorted.clone(),
        }
    }
}

impl<S, C, P> Sequence for OrderedView<S, C, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Projection<S::Item>,
    C: Comparator<P::Key>,
{
    type Item = S::Item;
    type Cursor = usize;

    fn begin(&self) -> usize {
        self.as_slice();
        0
    }

    fn end(&self) -> usize {
        self.as_slice().len()
    }

    fn value_at(&self, cursor: &usize) -> Result<S::Item> {
        self.as_slice()
            .get(*cursor)
            .cloned()
            .ok_or(Error::OutOfRange(DEREF_END))
    }

    fn advance(&self, cursor: &mut usize) -> Result<()> {
        if *cursor >= self.as_slice().len() {
            return Err(Error::OutOfRange(ADVANCE_END));
        }
        *cursor += 1;
        Ok(())
    }

    fn retreat(&self, cursor: &mut usize) -> Result<()> {
        if *cursor == 0 {
            return Err(Error::OutOfRange(RETREAT_BEGIN));
        }
        *cursor -= 1;
        Ok(())
    }

    fn advance_by(&self, cursor: &mut usize, n: usize) -> Result<usize> {
        let step = n.min(self.as_slice().len().saturating_sub(*cursor));
        *cursor += step;
        Ok(n - step)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SIZED | Capabilities::BIDIRECTIONAL
    }

    /// The buffer length once sorted; before that the source's own size, and
    /// only when the source cannot tell, the length after sorting.
    fn size(&self) -> Option<usize> {
        match self.sorted.get() {
            Some(sorted) => Some(sorted.len()),
            None => self
                .source
                .size()
                .or_else(|| Some(self.as_slice().len())),
        }
    }
}

impl_pipe!([S: Sequence, C, P] OrderedView<S, C, P>);

static_assertions::assert_not_impl_any!(
    OrderedView<alloc::vec::Vec<i32>, Ascending, Identity>: Sync
);

#[cfg(test)]
#[path = "ordered_test.rs"]
mod ordered_test;
