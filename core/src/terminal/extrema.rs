use core::cmp::Ordering;

use crate::adaptor::Adaptor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::views::{Identity, Projection};

/// Smallest or largest element by projected key, found in one pass.
///
/// Only a strictly better key replaces the current pick, so among equal keys
/// the first one in sequence order wins.
#[derive(Debug, Clone, Copy)]
pub struct Extremum<P> {
    projection: P,
    wanted: Ordering,
}

/// The smallest element, or [`Error::EmptySequence`].
pub fn min() -> Extremum<Identity> {
    min_by_key(Identity)
}

/// The largest element, or [`Error::EmptySequence`].
pub fn max() -> Extremum<Identity> {
    max_by_key(Identity)
}

/// The element with the smallest `projection` key.
///
/// ```
/// use melbi_seq_core::{min_by_key, seq};
///
/// let shortest = seq(vec!["pear", "fig", "kiwi", "yam"]) | min_by_key(|w: &&str| w.len());
/// assert_eq!(shortest, Ok("fig"));
/// ```
pub fn min_by_key<P>(projection: P) -> Extremum<P> {
    Extremum {
        projection,
        wanted: Ordering::Less,
    }
}

/// The element with the largest `projection` key.
pub fn max_by_key<P>(projection: P) -> Extremum<P> {
    Extremum {
        projection,
        wanted: Ordering::Greater,
    }
}

impl<S, P> Adaptor<S> for Extremum<P>
where
    S: Sequence,
    P: Projection<S::Item>,
    P::Key: Ord,
{
    type Output = Result<S::Item>;

    fn apply(self, source: S) -> Result<S::Item> {
        let mut items = source.items();
        let first = items.next().ok_or(Error::EmptySequence)?;
        let mut best_key = self.projection.project(&first);
        let mut best = first;
        for item in items {
            let key = self.projection.project(&item);
            if key.cmp(&best_key) == self.wanted {
                best_key = key;
                best = item;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "extrema_test.rs"]
mod extrema_test;
