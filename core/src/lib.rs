//! Lazy sequence views and terminal operations composed with `|`.
//!
//! The crate is organized leaves first:
//!
//! - [`sequence`]: the cursor protocol every sequence implements.
//! - [`sources`]: the protocol for standard containers and integer ranges.
//! - [`views`]: append, chunk, concat and ordered views, plus the [`Seq`] and
//!   [`Borrowed`] wrappers that bring any sequence into a pipeline.
//! - [`adaptor`]: the [`Adaptor`] trait and the `|` operator.
//! - [`lazy`]: factories for the view-producing adaptors.
//! - [`terminal`]: eager reducers (first, last, count, min, to_map, ...).
//!
//! # Example
//!
//! ```
//! use melbi_seq_core::{chunk, first, order_descending, seq, to_vec};
//!
//! let top = seq(vec![3, 1, 4, 1, 5, 9, 2, 6])
//!     | order_descending()
//!     | chunk(3).unwrap()
//!     | first();
//!
//! assert_eq!(top.unwrap() | to_vec(), vec![9, 6, 5]);
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod adaptor;
pub mod error;
pub mod lazy;
pub mod sequence;
pub mod sources;
pub mod terminal;
pub mod views;

pub use adaptor::{Adaptor, Pipe};
pub use error::{Error, Result};
pub use lazy::{
    AppendAdaptor, ChunkAdaptor, ConcatAdaptor, OrderAdaptor, append, chunk, concat, order,
    order_by, order_by_descending, order_descending, order_with,
};
pub use sequence::{Capabilities, Iter, RevIter, Sequence};
pub use terminal::{
    aggregate, aggregate_with, all, any, average, contains, count, element_at,
    element_at_or_none, first, first_or_none, first_where, first_where_or_none, last,
    last_or_none, last_where, last_where_or_none, max, max_by_key, min, min_by_key, to,
    to_array, to_map, to_map_with, to_vec,
};
pub use views::{
    AppendCursor, AppendView, Ascending, Borrowed, ChunkCursor, ChunkView, Comparator,
    ConcatCursor, ConcatView, Descending, Identity, OrderedView, Projection, Seq, Subrange,
    seq,
};

/// Test utilities: logging setup and sequences with restricted capabilities.
#[cfg(test)]
pub mod test_utils {
    use core::cell::Cell;

    use crate::error::{Error, Result};
    use crate::sequence::{ADVANCE_END, Capabilities, DEREF_END, RETREAT_BEGIN, Sequence};

    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_ordered_view() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }

    /// A forward-only sequence that does not report its size.
    #[derive(Debug, Clone)]
    pub struct ForwardOnly<T>(pub Vec<T>);

    impl<T: Clone> Sequence for ForwardOnly<T> {
        type Item = T;
        type Cursor = usize;

        fn begin(&self) -> usize {
            0
        }

        fn end(&self) -> usize {
            self.0.len()
        }

        fn value_at(&self, cursor: &usize) -> Result<T> {
            self.0.get(*cursor).cloned().ok_or(Error::OutOfRange(DEREF_END))
        }

        fn advance(&self, cursor: &mut usize) -> Result<()> {
            if *cursor >= self.0.len() {
                return Err(Error::OutOfRange(ADVANCE_END));
            }
            *cursor += 1;
            Ok(())
        }
    }

    crate::adaptor::impl_pipe!([T: Clone] ForwardOnly<T>);

    /// A sized, bidirectional sequence that counts how often elements are read.
    #[derive(Debug)]
    pub struct Recording<T> {
        items: Vec<T>,
        reads: Cell<usize>,
    }

    impl<T> Recording<T> {
        pub fn new(items: Vec<T>) -> Self {
            Self {
                items,
                reads: Cell::new(0),
            }
        }

        pub fn reads(&self) -> usize {
            self.reads.get()
        }
    }

    impl<T: Clone> Sequence for Recording<T> {
        type Item = T;
        type Cursor = usize;

        fn begin(&self) -> usize {
            0
        }

        fn end(&self) -> usize {
            self.items.len()
        }

        fn value_at(&self, cursor: &usize) -> Result<T> {
            let item = self
                .items
                .get(*cursor)
                .cloned()
                .ok_or(Error::OutOfRange(DEREF_END))?;
            self.reads.set(self.reads.get() + 1);
            Ok(item)
        }

        fn advance(&self, cursor: &mut usize) -> Result<()> {
            if *cursor >= self.items.len() {
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

        fn capabilities(&self) -> Capabilities {
            Capabilities::SIZED | Capabilities::BIDIRECTIONAL
        }

        fn size(&self) -> Option<usize> {
            Some(self.items.len())
        }
    }

    crate::adaptor::impl_pipe!([T: Clone] Recording<T>);
}
