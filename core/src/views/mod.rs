//! Views: sequences built from other sequences.
//!
//! Every view implements [`Sequence`](crate::Sequence) itself, forwards the
//! capabilities its sources allow, and supports `|`, so views nest to any
//! depth. None of them copies source elements eagerly except
//! [`OrderedView`], which materializes its source once on first use.
//!
//! Ownership is decided at the call site: a view owns whatever value it is
//! given. Pass a reference (`seq(&vec)`, `view.borrowed()`) to keep the source
//! where it is and borrow it for the lifetime of the view.

mod append;
mod chunk;
mod concat;
mod ordered;
mod seq;

pub use append::{AppendCursor, AppendView};
pub use chunk::{ChunkCursor, ChunkView, Subrange};
pub use concat::{ConcatCursor, ConcatView};
pub use ordered::{Ascending, Comparator, Descending, Identity, OrderedView, Projection};
pub use seq::{Borrowed, Seq, seq};
