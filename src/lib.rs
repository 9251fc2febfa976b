//! Melbi Seq - lazy sequence views composed with `|`
//!
//! # Overview
//!
//! A pipeline starts from a source, passes through any number of lazy views
//! and usually ends in a terminal operation that produces a value:
//!
//! - **Sources**: `Vec`, arrays, `VecDeque`, slices, references to them and
//!   integer ranges, brought into a pipeline with [`seq`]
//! - **Views**: [`append`], [`chunk`], [`concat`] and the `order*` family;
//!   nothing is read from the source until the view is iterated
//! - **Terminal operations**: [`first`], [`last`], [`count`], [`average`],
//!   [`min`], [`max`], [`to_vec`], [`to_map`] and friends
//!
//! # Quick Start
//!
//! ```
//! use melbi_seq::prelude::*;
//!
//! let scores = vec![72, 95, 88, 61, 95, 79];
//!
//! // Borrow the data, sort it and split it into pages of two.
//! let pages = seq(&scores) | order_descending() | chunk(2).unwrap();
//! let best_page = pages.borrowed() | first();
//! assert_eq!(best_page.unwrap() | to_vec(), vec![&95, &95]);
//! assert_eq!(pages | count(), 3);
//!
//! // Terminal operations return errors instead of panicking.
//! assert_eq!(seq(Vec::<i32>::new()) | max(), Err(Error::EmptySequence));
//! assert_eq!(seq(scores) | average(), Ok(81.66666666666667));
//! ```
//!
//! # Reuse and Reverse Traversal
//!
//! Views are sequences themselves, so they can be iterated more than once,
//! borrowed with [`Sequence::borrowed`] and, when every source underneath
//! supports it, walked backwards:
//!
//! ```
//! use melbi_seq::prelude::*;
//!
//! let view = seq(1i32..4) | concat(vec![10, 20]) | append(30);
//! assert_eq!(view.size(), Some(6));
//! assert_eq!(view.rev_items().unwrap().collect::<Vec<_>>(), vec![30, 20, 10, 3, 2, 1]);
//! assert_eq!(view.borrowed() | last(), Ok(30));
//! assert_eq!(view | element_at(3), Ok(10));
//! ```
//!
//! # Custom Sequences
//!
//! Any type implementing [`Sequence`] can feed a pipeline, either through
//! [`seq`] or the [`Pipe::pipe`] method:
//!
//! ```
//! use melbi_seq::prelude::*;
//! use melbi_seq::Result;
//!
//! /// Powers of two below a limit.
//! struct Powers(u32);
//!
//! impl Sequence for Powers {
//!     type Item = u64;
//!     type Cursor = u32;
//!
//!     fn begin(&self) -> u32 {
//!         0
//!     }
//!
//!     fn end(&self) -> u32 {
//!         self.0
//!     }
//!
//!     fn value_at(&self, cursor: &u32) -> Result<u64> {
//!         if *cursor >= self.0 {
//!             return Err(Error::OutOfRange("past the last power"));
//!         }
//!         Ok(1 << cursor)
//!     }
//!
//!     fn advance(&self, cursor: &mut u32) -> Result<()> {
//!         if *cursor >= self.0 {
//!             return Err(Error::OutOfRange("past the last power"));
//!         }
//!         *cursor += 1;
//!         Ok(())
//!     }
//! }
//!
//! assert_eq!(Powers(5).pipe(last()), Ok(16));
//! assert_eq!(seq(Powers(4)) | append(0) | to_vec(), vec![1, 2, 4, 8, 0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use melbi_seq_core::{
    Adaptor, Capabilities, Error, Pipe, Result, Sequence, adaptor, error, lazy, sequence,
    sources, terminal, views,
};

pub use melbi_seq_core::{
    append, chunk, concat, order, order_by, order_by_descending, order_descending, order_with,
    seq,
};

pub use melbi_seq_core::{
    aggregate, aggregate_with, all, any, average, contains, count, element_at, element_at_or_none,
    first, first_or_none, first_where, first_where_or_none, last, last_or_none, last_where,
    last_where_or_none, max, max_by_key, min, min_by_key, to, to_array, to_map, to_map_with,
    to_vec,
};

pub use melbi_seq_core::{
    AppendView, Ascending, Borrowed, ChunkView, Comparator, ConcatView, Descending, Identity,
    OrderedView, Projection, Seq, Subrange,
};

/// Everything needed to build and run pipelines.
pub mod prelude {
    pub use melbi_seq_core::{
        Error, Pipe, Sequence, aggregate, aggregate_with, all, any, append, average, chunk,
        concat, contains, count, element_at, element_at_or_none, first, first_or_none,
        first_where, first_where_or_none, last, last_or_none, last_where, last_where_or_none,
        max, max_by_key, min, min_by_key, order, order_by, order_by_descending,
        order_descending, order_with, seq, to, to_array, to_map, to_map_with, to_vec,
    };
}
