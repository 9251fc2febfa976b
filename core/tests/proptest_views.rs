//! Property tests for view and terminal invariants

use std::cell::Cell;

use melbi_seq_core::{
    Error, Result, Sequence, append, chunk, concat, count, element_at, element_at_or_none, first,
    last, max, min, order, order_by, seq, to_vec,
};
use proptest::prelude::*;

/// A sized, bidirectional source that counts element reads.
struct Recording {
    items: Vec<i32>,
    reads: Cell<usize>,
}

impl Sequence for Recording {
    type Item = i32;
    type Cursor = usize;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.items.len()
    }

    fn value_at(&self, cursor: &usize) -> Result<i32> {
        self.reads.set(self.reads.get() + 1);
        self.items
            .get(*cursor)
            .copied()
            .ok_or(Error::OutOfRange("cannot dereference the end cursor"))
    }

    fn advance(&self, cursor: &mut usize) -> Result<()> {
        if *cursor >= self.items.len() {
            return Err(Error::OutOfRange("cannot advance past the end"));
        }
        *cursor += 1;
        Ok(())
    }
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    /// Append yields the source then the value, exactly once
    #[test]
    fn append_adds_one_element(data in small_vec(), value in any::<i32>()) {
        let view = seq(data.clone()) | append(value);
        prop_assert_eq!(view.size(), Some(data.len() + 1));

        let mut expected = data.clone();
        expected.push(value);
        prop_assert_eq!(view.borrowed() | to_vec(), expected.clone());

        expected.reverse();
        prop_assert_eq!(view.rev_items().unwrap().collect::<Vec<_>>(), expected);
    }

    /// Flattening the chunks gives back the source
    #[test]
    fn chunks_partition_the_source(data in small_vec(), size in 1usize..8) {
        let view = seq(data.clone()) | chunk(size).unwrap();
        let chunks: Vec<Vec<i32>> = view.items().map(|c| c | to_vec()).collect();

        prop_assert_eq!(chunks.len(), data.len().div_ceil(size));
        prop_assert_eq!(view.size(), Some(chunks.len()));
        prop_assert_eq!(chunks.concat(), data);
        if let Some((tail, body)) = chunks.split_last() {
            prop_assert!(body.iter().all(|c| c.len() == size));
            prop_assert!((1..=size).contains(&tail.len()));
        }

        let mut reversed: Vec<Vec<i32>> =
            view.rev_items().unwrap().map(|c| c | to_vec()).collect();
        reversed.reverse();
        prop_assert_eq!(reversed, chunks);
    }

    /// Concat yields the first sequence then the second
    #[test]
    fn concat_joins_in_order(a in small_vec(), b in small_vec()) {
        let view = seq(a.clone()) | concat(b.clone());
        prop_assert_eq!(view.borrowed() | count(), a.len() + b.len());

        let expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(view.borrowed() | to_vec(), expected.clone());

        let reversed: Vec<i32> = view.rev_items().unwrap().collect();
        prop_assert_eq!(reversed, expected.into_iter().rev().collect::<Vec<_>>());
    }

    /// Ordering reads the source once and yields a sorted permutation
    #[test]
    fn order_reads_source_once(data in small_vec()) {
        let source = Recording { items: data.clone(), reads: Cell::new(0) };
        let view = source.borrowed() | order_by(|x: &i32| x.abs());

        let first_pass = view.borrowed() | to_vec();
        let second_pass = view.borrowed() | to_vec();
        prop_assert_eq!(&first_pass, &second_pass);
        prop_assert_eq!(source.reads.get(), data.len());

        prop_assert!(first_pass.windows(2).all(|w| w[0].abs() <= w[1].abs()));
        let mut sorted_input = data.clone();
        sorted_input.sort();
        let mut sorted_output = first_pass;
        sorted_output.sort();
        prop_assert_eq!(sorted_output, sorted_input);
    }

    /// Ascending order agrees with a standard sort
    #[test]
    fn order_matches_sort(data in small_vec()) {
        let mut expected = data.clone();
        expected.sort();
        prop_assert_eq!(seq(data) | order() | to_vec(), expected);
    }

    /// element_at returns the n-th element or fails past the end
    #[test]
    fn element_at_matches_indexing(data in small_vec(), n in 0usize..50) {
        let source = seq(data.clone());
        match data.get(n) {
            Some(&item) => {
                prop_assert_eq!(source.borrowed() | element_at(n), Ok(item));
                prop_assert_eq!(source.borrowed() | element_at_or_none(n), Some(item));
            }
            None => {
                prop_assert_eq!(
                    source.borrowed() | element_at(n),
                    Err(Error::OutOfRange("position is past the end"))
                );
                prop_assert_eq!(source.borrowed() | element_at_or_none(n), None);
            }
        }
    }

    /// first, last, min and max agree with the standard library
    #[test]
    fn endpoints_and_extrema(data in small_vec()) {
        let source = seq(data.clone());
        prop_assert_eq!(source.borrowed() | first(), data.first().copied().ok_or(Error::EmptySequence));
        prop_assert_eq!(source.borrowed() | last(), data.last().copied().ok_or(Error::EmptySequence));
        prop_assert_eq!(source.borrowed() | min(), data.iter().copied().min().ok_or(Error::EmptySequence));
        prop_assert_eq!(source.borrowed() | max(), data.iter().copied().max().ok_or(Error::EmptySequence));
    }
}
