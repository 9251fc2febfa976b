use alloc::rc::Rc;
use core::fmt;

use crate::adaptor::impl_pipe;
use crate::error::{Error, Result};
use crate::sequence::{ADVANCE_END, Capabilities, DEREF_END, RETREAT_BEGIN, Sequence};

/// Consecutive, non-overlapping chunks of a fixed size.
///
/// The final chunk holds whatever is left and may be shorter than the
/// requested size, but is never empty. An empty source has no chunks.
///
/// The source is kept behind an [`Rc`] so every [`Subrange`] handed out can
/// read from it without copying elements.
///
/// ```
/// use melbi_seq_core::{Sequence, chunk, seq, to_vec};
///
/// let chunks: Vec<Vec<i32>> = (seq(vec![1, 2, 3, 4, 5]) | chunk(2).unwrap())
///     .items()
///     .map(|c| c | to_vec())
///     .collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub struct ChunkView<S> {
    source: Rc<S>,
    size: usize,
}

/// Position in a [`ChunkView`]: the `[from, to)` bounds of one chunk.
///
/// `missing` is how many elements the chunk is short of the requested size;
/// it is only non-zero for the final chunk and the end cursor, and lets
/// reverse traversal step back over a short final chunk. Two cursors are equal
/// when their chunks start at the same position.
#[derive(Debug, Clone)]
pub struct ChunkCursor<C> {
    from: C,
    to: C,
    missing: usize,
}

impl<C> ChunkCursor<C> {
    /// Source cursor of the chunk's first element.
    pub fn chunk_start(&self) -> &C {
        &self.from
    }

    /// Source cursor one past the chunk's last element.
    pub fn chunk_end(&self) -> &C {
        &self.to
    }
}

impl<C: PartialEq> PartialEq for ChunkCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

impl<S: Sequence> ChunkView<S> {
    /// Fails with [`Error::InvalidArgument`] when `size` is zero.
    pub fn new(source: S, size: usize) -> Result<Self> {
        if size == 0 {
            tracing::debug!("rejecting chunk view with a chunk size of 0");
            return Err(Error::InvalidArgument("chunk size cannot be 0"));
        }
        Ok(Self {
            source: Rc::new(source),
            size,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.size
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Bounds of the chunk starting at `from`.
    fn chunk_at(&self, from: S::Cursor) -> Result<ChunkCursor<S::Cursor>> {
        let mut to = from.clone();
        let missing = self.source.advance_by(&mut to, self.size)?;
        Ok(ChunkCursor { from, to, missing })
    }

    /// How many elements the final chunk is short of `size`, when known.
    fn final_shortfall(&self) -> usize {
        self.source
            .size()
            .map_or(0, |n| (self.size - n % self.size) % self.size)
    }
}

impl<S> Clone for ChunkView<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            size: self.size,
        }
    }
}

impl<S: Sequence> Sequence for ChunkView<S> {
    type Item = Subrange<S>;
    type Cursor = ChunkCursor<S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        self.chunk_at(self.source.begin())
            .expect("Bug: advancing towards the end of a sequence failed")
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        ChunkCursor {
            from: end.clone(),
            to: end,
            missing: self.final_shortfall(),
        }
    }

    fn value_at(&self, cursor: &Self::Cursor) -> Result<Subrange<S>> {
        if cursor.from == self.source.end() {
            return Err(Error::OutOfRange(DEREF_END));
        }
        Ok(Subrange {
            source: Rc::clone(&self.source),
            start: cursor.from.clone(),
            stop: cursor.to.clone(),
            len: self.size - cursor.missing,
        })
    }

    fn advance(&self, cursor: &mut Self::Cursor) -> Result<()> {
        let end = self.source.end();
        if cursor.from == end {
            return Err(Error::OutOfRange(ADVANCE_END));
        }
        if cursor.to == end {
            // Keep `missing`: it now describes the final chunk we just left.
            cursor.from = end;
        } else {
            *cursor = self.chunk_at(cursor.to.clone())?;
        }
        Ok(())
    }

    fn retreat(&self, cursor: &mut Self::Cursor) -> Result<()> {
        if !self.is_bidirectional() {
            return Err(Error::NotBidirectional);
        }
        if cursor.from == self.source.begin() {
            return Err(Error::OutOfRange(RETREAT_BEGIN));
        }
        let at_end = cursor.from == self.source.end();
        let step = if at_end {
            self.size - cursor.missing
        } else {
            self.size
        };
        let mut from = cursor.from.clone();
        self.source.retreat_by(&mut from, step)?;
        cursor.to = core::mem::replace(&mut cursor.from, from);
        if !at_end {
            cursor.missing = 0;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        let source = self.source.capabilities();
        if source.contains(Capabilities::SIZED) {
            source
        } else {
            source - Capabilities::BIDIRECTIONAL
        }
    }

    fn size(&self) -> Option<usize> {
        self.source.size().map(|n| n.div_ceil(self.size))
    }
}

impl_pipe!([S: Sequence] ChunkView<S>);

/// One chunk of a [`ChunkView`]: the elements of the source between two of
/// its cursors.
///
/// A subrange is itself a sized sequence, bidirectional when the source is.
pub struct Subrange<S: Sequence> {
    source: Rc<S>,
    start: S::Cursor,
    stop: S::Cursor,
    len: usize,
}

impl<S: Sequence> Subrange<S> {
    /// Source cursor of the first element.
    pub fn start_cursor(&self) -> &S::Cursor {
        &self.start
    }

    /// Source cursor one past the last element.
    pub fn end_cursor(&self) -> &S::Cursor {
        &self.stop
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: Sequence> Clone for Subrange<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            start: self.start.clone(),
            stop: self.stop.clone(),
            len: self.len,
        }
    }
}

impl<S> fmt::Debug for Subrange<S>
where
    S: Sequence,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

impl<S: Sequence> Sequence for Subrange<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn begin(&self) -> S::Cursor {
        self.start.clone()
    }

    fn end(&self) -> S::Cursor {
        self.stop.clone()
    }

    fn value_at(&self, cursor: &S::Cursor) -> Result<S::Item> {
        if *cursor == self.stop {
            return Err(Error::OutOfRange(DEREF_END));
        }
        self.source.value_at(cursor)
    }

    fn advance(&self, cursor: &mut S::Cursor) -> Result<()> {
        if *cursor == self.stop {
            return Err(Error::OutOfRange(ADVANCE_END));
        }
        self.source.advance(cursor)
    }

    fn retreat(&self, cursor: &mut S::Cursor) -> Result<()> {
        if *cursor == self.start {
            return Err(Error::OutOfRange(RETREAT_BEGIN));
        }
        self.source.retreat(cursor)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SIZED | (self.source.capabilities() & Capabilities::BIDIRECTIONAL)
    }

    fn size(&self) -> Option<usize> {
        Some(self.len)
    }
}

impl_pipe!([S: Sequence] Subrange<S>);

static_assertions::assert_not_impl_any!(ChunkView<alloc::vec::Vec<i32>>: Send, Sync);

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
