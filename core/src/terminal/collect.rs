//! Operations that materialize a sequence into a container.

use alloc::vec::Vec;
use core::{hash::Hash, marker::PhantomData};

use hashbrown::HashMap;

use crate::adaptor::Adaptor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::views::Projection;

/// Collects into any `FromIterator` container.
pub struct To<C>(PhantomData<fn() -> C>);

/// Collects into `C`.
///
/// ```
/// use std::collections::BTreeSet;
/// use melbi_seq_core::{seq, to};
///
/// let set = seq(vec![3, 1, 3, 2]) | to::<BTreeSet<_>>();
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn to<C>() -> To<C> {
    To(PhantomData)
}

impl<C> Clone for To<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for To<C> {}

impl<S, C> Adaptor<S> for To<C>
where
    S: Sequence,
    C: FromIterator<S::Item>,
{
    type Output = C;

    fn apply(self, source: S) -> C {
        source.items().collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToVec;

pub fn to_vec() -> ToVec {
    ToVec
}

impl<S: Sequence> Adaptor<S> for ToVec {
    type Output = Vec<S::Item>;

    fn apply(self, source: S) -> Vec<S::Item> {
        source.items().collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToArray<const N: usize>;

/// Collects exactly `N` elements into an array.
///
/// Fails with [`Error::OutOfRange`] when the sequence has more or fewer.
pub fn to_array<const N: usize>() -> ToArray<N> {
    ToArray
}

impl<S: Sequence, const N: usize> Adaptor<S> for ToArray<N> {
    type Output = Result<[S::Item; N]>;

    fn apply(self, source: S) -> Result<[S::Item; N]> {
        // One extra element is enough to tell the sequence is too long.
        let items: Vec<S::Item> = source.items().take(N.saturating_add(1)).collect();
        <[S::Item; N]>::try_from(items)
            .map_err(|_| Error::OutOfRange("sequence length does not match the array length"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToMap<K>(K);

#[derive(Debug, Clone, Copy)]
pub struct ToMapWith<K, E> {
    key: K,
    element: E,
}

/// Builds a map from `key(item)` to the item itself.
///
/// When two items share a key the first one is kept.
pub fn to_map<K>(key: K) -> ToMap<K> {
    ToMap(key)
}

/// Builds a map from `key(item)` to `element(item)`.
///
/// When two items share a key the first one is kept.
///
/// ```
/// use melbi_seq_core::{seq, to_map_with};
///
/// let lengths = seq(vec!["one", "three", "two"])
///     | to_map_with(|w: &&str| w.len(), |w: &&str| w.to_uppercase());
/// assert_eq!(lengths[&3], "ONE");
/// assert_eq!(lengths[&5], "THREE");
/// ```
pub fn to_map_with<K, E>(key: K, element: E) -> ToMapWith<K, E> {
    ToMapWith { key, element }
}

impl<S, K> Adaptor<S> for ToMap<K>
where
    S: Sequence,
    K: Projection<S::Item>,
    K::Key: Eq + Hash,
{
    type Output = HashMap<K::Key, S::Item>;

    fn apply(self, source: S) -> Self::Output {
        let mut map = HashMap::new();
        for item in source.items() {
            map.entry(self.0.project(&item)).or_insert(item);
        }
        map
    }
}

impl<S, K, E> Adaptor<S> for ToMapWith<K, E>
where
    S: Sequence,
    K: Projection<S::Item>,
    K::Key: Eq + Hash,
    E: Projection<S::Item>,
{
    type Output = HashMap<K::Key, E::Key>;

    fn apply(self, source: S) -> Self::Output {
        let mut map = HashMap::new();
        for item in source.items() {
            map.entry(self.key.project(&item))
                .or_insert_with(|| self.element.project(&item));
        }
        map
    }
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod collect_test;
