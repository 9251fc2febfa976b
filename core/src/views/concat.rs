use crate::adaptor::impl_pipe;
use crate::error::{Error, Result};
use crate::sequence::{Capabilities, Sequence};

/// Every element of a first sequence followed by every element of a second
/// one with the same item type.
///
/// ```
/// use melbi_seq_core::{concat, seq, to_vec};
///
/// let all = seq(vec![1, 2, 3]) | concat(vec![4, 5]) | to_vec();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct ConcatView<A, B> {
    first: A,
    second: B,
}

/// Position in a [`ConcatView`]: which half is active and the cursor in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcatCursor<A, B> {
    First(A),
    Second(B),
}

impl<A, B> ConcatView<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Sequence for ConcatView<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn begin(&self) -> Self::Cursor {
        let first = self.first.begin();
        if first == self.first.end() {
            ConcatCursor::Second(self.second.begin())
        } else {
            ConcatCursor::First(first)
        }
    }

    fn end(&self) -> Self::Cursor {
        ConcatCursor::Second(self.second.end())
    }

    fn value_at(&self, cursor: &Self::Cursor) -> Result<A::Item> {
        match cursor {
            ConcatCursor::First(inner) => self.first.value_at(inner),
            ConcatCursor::Second(inner) => self.second.value_at(inner),
        }
    }

    fn advance(&self, cursor: &mut Self::Cursor) -> Result<()> {
        match cursor {
            ConcatCursor::First(inner) => {
                self.first.advance(inner)?;
                let left_first = *inner == self.first.end();
                if left_first {
                    *cursor = ConcatCursor::Second(self.second.begin());
                }
                Ok(())
            }
            ConcatCursor::Second(inner) => self.second.advance(inner),
        }
    }

    fn retreat(&self, cursor: &mut Self::Cursor) -> Result<()> {
        if !self.is_bidirectional() {
            return Err(Error::NotBidirectional);
        }
        match cursor {
            ConcatCursor::First(inner) => self.first.retreat(inner),
            ConcatCursor::Second(inner) if *inner == self.second.begin() => {
                let mut last = self.first.end();
                self.first.retreat(&mut last)?;
                *cursor = ConcatCursor::First(last);
                Ok(())
            }
            ConcatCursor::Second(inner) => self.second.retreat(inner),
        }
    }

    fn capabilities(&self) -> Capabilities {
        let shared = self.first.capabilities() & self.second.capabilities();
        if shared.contains(Capabilities::SIZED) && self.size().is_none() {
            shared - Capabilities::SIZED
        } else {
            shared
        }
    }

    /// `None` when either half is unsized or the total overflows `usize`.
    fn size(&self) -> Option<usize> {
        self.first.size()?.checked_add(self.second.size()?)
    }
}

impl_pipe!([A: Sequence, B: Sequence<Item = A::Item>] ConcatView<A, B>);

#[cfg(test)]
#[path = "concat_test.rs"]
mod concat_test;
