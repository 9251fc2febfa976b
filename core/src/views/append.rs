use crate::adaptor::impl_pipe;
use crate::error::{Error, Result};
use crate::sequence::{ADVANCE_END, Capabilities, DEREF_END, RETREAT_BEGIN, Sequence};

/// A source sequence followed by exactly one extra value.
///
/// ```
/// use melbi_seq_core::{append, seq, to_vec};
///
/// assert_eq!(seq(vec![1, 2, 3]) | append(9) | to_vec(), vec![1, 2, 3, 9]);
/// assert_eq!(seq(Vec::<i32>::new()) | append(9) | to_vec(), vec![9]);
/// ```
pub struct AppendView<S: Sequence> {
    source: S,
    value: S::Item,
}

/// Position in an [`AppendView`].
///
/// The appended and end positions compare by state alone; source positions
/// also compare their source cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendCursor<C> {
    InSource(C),
    InAppended,
    AtEnd,
}

impl<S: Sequence> AppendView<S> {
    pub fn new(source: S, value: S::Item) -> Self {
        Self { source, value }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn value(&self) -> &S::Item {
        &self.value
    }

    pub fn into_parts(self) -> (S, S::Item) {
        (self.source, self.value)
    }
}

impl<S> Clone for AppendView<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            value: self.value.clone(),
        }
    }
}

impl<S> Sequence for AppendView<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor = AppendCursor<S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        let first = self.source.begin();
        if first == self.source.end() {
            AppendCursor::InAppended
        } else {
            AppendCursor::InSource(first)
        }
    }

    fn end(&self) -> Self::Cursor {
        AppendCursor::AtEnd
    }

    fn value_at(&self, cursor: &Self::Cursor) -> Result<S::Item> {
        match cursor {
            AppendCursor::InSource(inner) => self.source.value_at(inner),
            AppendCursor::InAppended => Ok(self.value.clone()),
            AppendCursor::AtEnd => Err(Error::OutOfRange(DEREF_END)),
        }
    }

    fn advance(&self, cursor: &mut Self::Cursor) -> Result<()> {
        match cursor {
            AppendCursor::InSource(inner) => {
                self.source.advance(inner)?;
                let left_source = *inner == self.source.end();
                if left_source {
                    *cursor = AppendCursor::InAppended;
                }
            }
            AppendCursor::InAppended => *cursor = AppendCursor::AtEnd,
            AppendCursor::AtEnd => return Err(Error::OutOfRange(ADVANCE_END)),
        }
        Ok(())
    }

    fn retreat(&self, cursor: &mut Self::Cursor) -> Result<()> {
        if !self.source.is_bidirectional() {
            return Err(Error::NotBidirectional);
        }
        match cursor {
            AppendCursor::InSource(inner) => self.source.retreat(inner)?,
            AppendCursor::InAppended => {
                let mut last = self.source.end();
                if last == self.source.begin() {
                    return Err(Error::OutOfRange(RETREAT_BEGIN));
                }
                self.source.retreat(&mut last)?;
                *cursor = AppendCursor::InSource(last);
            }
            AppendCursor::AtEnd => *cursor = AppendCursor::InAppended,
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        let source = self.source.capabilities();
        if source.contains(Capabilities::SIZED) && self.size().is_none() {
            source - Capabilities::SIZED
        } else {
            source
        }
    }

    /// `None` when the source is unsized or one more element overflows `usize`.
    fn size(&self) -> Option<usize> {
        self.source.size()?.checked_add(1)
    }
}

impl_pipe!([S: Sequence] AppendView<S>);

#[cfg(test)]
#[path = "append_test.rs"]
mod append_test;
