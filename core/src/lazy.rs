//! Adaptors that produce views.
//!
//! Each factory captures its parameters and returns an adaptor; the view is
//! built when the adaptor meets a source through `|`. Nothing is read from the
//! source at that point.

use crate::adaptor::Adaptor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::views::{
    AppendView, Ascending, ChunkView, Comparator, ConcatView, Descending, Identity, OrderedView,
    Projection,
};

// ============================================================================
// Append
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppendAdaptor<T> {
    value: T,
}

/// Adds `value` after the last element of the source.
pub fn append<T>(value: T) -> AppendAdaptor<T> {
    AppendAdaptor { value }
}

impl<S, T> Adaptor<S> for AppendAdaptor<T>
where
    S: Sequence<Item = T>,
{
    type Output = AppendView<S>;

    fn apply(self, source: S) -> AppendView<S> {
        AppendView::new(source, self.value)
    }
}

// ============================================================================
// Chunk
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ChunkAdaptor {
    size: usize,
}

/// Splits the source into chunks of `size` elements.
///
/// Fails with [`Error::InvalidArgument`] when `size` is zero, so a pipeline
/// reads `source | chunk(n)? | ...`.
pub fn chunk(size: usize) -> Result<ChunkAdaptor> {
    if size == 0 {
        tracing::debug!("rejecting chunk adaptor with a chunk size of 0");
        return Err(Error::InvalidArgument("chunk size cannot be 0"));
    }
    Ok(ChunkAdaptor { size })
}

impl<S: Sequence> Adaptor<S> for ChunkAdaptor {
    type Output = ChunkView<S>;

    fn apply(self, source: S) -> ChunkView<S> {
        ChunkView::new(source, self.size).expect("Bug: chunk size was validated by `chunk`")
    }
}

// ============================================================================
// Concat
// ============================================================================

#[derive(Debug, Clone)]
pub struct ConcatAdaptor<B> {
    other: B,
}

/// Visits `other` after the source. Both must yield the same item type.
pub fn concat<B: Sequence>(other: B) -> ConcatAdaptor<B> {
    ConcatAdaptor { other }
}

impl<S, B> Adaptor<S> for ConcatAdaptor<B>
where
    S: Sequence,
    B: Sequence<Item = S::Item>,
{
    type Output = ConcatView<S, B>;

    fn apply(self, source: S) -> ConcatView<S, B> {
        ConcatView::new(source, self.other)
    }
}

// ============================================================================
// Order
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct OrderAdaptor<C, P> {
    comparator: C,
    projection: P,
}

/// Sorts elements in ascending order.
pub fn order() -> OrderAdaptor<Ascending, Identity> {
    order_with(Ascending, Identity)
}

/// Sorts elements in descending order.
pub fn order_descending() -> OrderAdaptor<Descending, Identity> {
    order_with(Descending, Identity)
}

/// Sorts elements by ascending `projection` key.
///
/// The closure's argument type has to be spelled out, since the source is not
/// known yet when the adaptor is created: `order_by(|p: &Person| p.age)`.
pub fn order_by<P>(projection: P) -> OrderAdaptor<Ascending, P> {
    order_with(Ascending, projection)
}

/// Sorts elements by descending `projection` key.
pub fn order_by_descending<P>(projection: P) -> OrderAdaptor<Descending, P> {
    order_with(Descending, projection)
}

/// Sorts elements by `projection` key under a custom `comparator`.
///
/// ```
/// use melbi_seq_core::{Identity, order_with, seq, to_vec};
///
/// let sorted = seq(vec![2.5, -1.0, 0.5])
///     | order_with(|a: &f64, b: &f64| a.total_cmp(b), Identity)
///     | to_vec();
/// assert_eq!(sorted, vec![-1.0, 0.5, 2.5]);
/// ```
pub fn order_with<C, P>(comparator: C, projection: P) -> OrderAdaptor<C, P> {
    OrderAdaptor {
        comparator,
        projection,
    }
}

impl<S, C, P> Adaptor<S> for OrderAdaptor<C, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Projection<S::Item>,
    C: Comparator<P::Key>,
{
    type Output = OrderedView<S, C, P>;

    fn apply(self, source: S) -> OrderedView<S, C, P> {
        OrderedView::new(source, self.comparator, self.projection)
    }
}

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;
