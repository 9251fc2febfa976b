//! Operations that fold the whole sequence into one value.

use num_traits::ToPrimitive;

use crate::adaptor::Adaptor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy)]
pub struct Aggregate<F>(F);

#[derive(Debug, Clone, Copy)]
pub struct AggregateWith<A, F> {
    seed: A,
    fold: F,
}

/// Left fold starting from `Item::default()`.
///
/// ```
/// use melbi_seq_core::{aggregate, seq};
///
/// assert_eq!(seq(vec![1, 2, 3]) | aggregate(|acc: i32, x: i32| acc * 10 + x), 123);
/// ```
pub fn aggregate<F>(fold: F) -> Aggregate<F> {
    Aggregate(fold)
}

/// Left fold starting from `seed`.
pub fn aggregate_with<A, F>(seed: A, fold: F) -> AggregateWith<A, F> {
    AggregateWith { seed, fold }
}

impl<S, F> Adaptor<S> for Aggregate<F>
where
    S: Sequence,
    S::Item: Default,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    type Output = S::Item;

    fn apply(self, source: S) -> S::Item {
        source.items().fold(S::Item::default(), self.0)
    }
}

impl<S, A, F> Adaptor<S> for AggregateWith<A, F>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    type Output = A;

    fn apply(self, source: S) -> A {
        source.items().fold(self.seed, self.fold)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct All<P>(P);

#[derive(Debug, Clone, Copy)]
pub struct Any<P>(P);

/// Whether every element matches. Stops at the first mismatch; `true` when
/// the sequence is empty.
pub fn all<P>(predicate: P) -> All<P> {
    All(predicate)
}

/// Whether some element matches. Stops at the first match; `false` when the
/// sequence is empty.
pub fn any<P>(predicate: P) -> Any<P> {
    Any(predicate)
}

impl<S, P> Adaptor<S> for All<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn apply(mut self, source: S) -> bool {
        source.items().all(|item| (self.0)(&item))
    }
}

impl<S, P> Adaptor<S> for Any<P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn apply(mut self, source: S) -> bool {
        source.items().any(|item| (self.0)(&item))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Average;

/// Arithmetic mean of the elements as `f64`.
///
/// Fails with [`Error::EmptySequence`] on an empty sequence, and with
/// [`Error::InvalidArgument`] if an element has no `f64` representation.
pub fn average() -> Average {
    Average
}

impl<S> Adaptor<S> for Average
where
    S: Sequence,
    S::Item: ToPrimitive,
{
    type Output = Result<f64>;

    fn apply(self, source: S) -> Result<f64> {
        let mut sum = 0.0;
        let mut len = 0usize;
        for item in source.items() {
            sum += item
                .to_f64()
                .ok_or(Error::InvalidArgument("element cannot be represented as f64"))?;
            len += 1;
        }
        if len == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(sum / len as f64)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Contains<T>(T);

/// Whether any element equals `value`.
pub fn contains<T>(value: T) -> Contains<T> {
    Contains(value)
}

impl<S, T> Adaptor<S> for Contains<T>
where
    S: Sequence,
    S::Item: PartialEq<T>,
{
    type Output = bool;

    fn apply(self, source: S) -> bool {
        source.items().any(|item| item == self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Count;

/// Number of elements: the reported size when the sequence is sized, else the
/// length of a full walk.
pub fn count() -> Count {
    Count
}

impl<S: Sequence> Adaptor<S> for Count {
    type Output = usize;

    fn apply(self, source: S) -> usize {
        if let Some(size) = source.size() {
            return size;
        }
        tracing::trace!("sequence is not sized, counting by walking it");
        let end = source.end();
        let mut cursor = source.begin();
        let mut len = 0;
        while cursor != end {
            source
                .advance(&mut cursor)
                .expect("Bug: cursor before the end failed to advance");
            len += 1;
        }
        len
    }
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;
