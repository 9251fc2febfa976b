//! The cursor protocol for standard containers and integer ranges.
//!
//! Owned containers (`Vec<T>`, `[T; N]`, `VecDeque<T>`) yield clones of their
//! elements, and moving one into a pipeline moves the data into the view.
//! References to them (`&Vec<T>`, `&[T]`, ...) yield `&T` and keep the data
//! where it is. All of them are random access: cursors are indices, and
//! [`Sequence::advance_by`] jumps instead of stepping.

use alloc::{collections::VecDeque, vec::Vec};
use core::ops::Range;

use crate::error::{Error, Result};
use crate::sequence::{ADVANCE_END, Capabilities, DEREF_END, RETREAT_BEGIN, Sequence};

macro_rules! impl_indexed_sequence {
    // Shared cursor arithmetic, the cursor being an index in `0..=len`.
    (@cursor) => {
        fn advance(&self, cursor: &mut usize) -> Result<()> {
            if *cursor >= self.len() {
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

        fn advance_by(&self, cursor: &mut usize, n: usize) -> Result<usize> {
            let step = n.min(self.len().saturating_sub(*cursor));
            *cursor += step;
            Ok(n - step)
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::SIZED | Capabilities::BIDIRECTIONAL
        }

        fn size(&self) -> Option<usize> {
            Some(self.len())
        }
    };

    (owned [$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Sequence for $ty {
            type Item = T;
            type Cursor = usize;

            fn begin(&self) -> usize {
                0
            }

            fn end(&self) -> usize {
                self.len()
            }

            fn value_at(&self, cursor: &usize) -> Result<T> {
                self.get(*cursor)
                    .cloned()
                    .ok_or(Error::OutOfRange(DEREF_END))
            }

            impl_indexed_sequence!(@cursor);
        }
    };

    (borrowed [$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Sequence for $ty {
            type Item = &'a T;
            type Cursor = usize;

            fn begin(&self) -> usize {
                0
            }

            fn end(&self) -> usize {
                self.len()
            }

            fn value_at(&self, cursor: &usize) -> Result<&'a T> {
                let this: $ty = *self;
                this.get(*cursor).ok_or(Error::OutOfRange(DEREF_END))
            }

            impl_indexed_sequence!(@cursor);
        }
    };
}

impl_indexed_sequence!(owned [T: Clone] Vec<T>);
impl_indexed_sequence!(owned [T: Clone, const N: usize] [T; N]);
impl_indexed_sequence!(owned [T: Clone] VecDeque<T>);
impl_indexed_sequence!(borrowed ['a, T] &'a [T]);
impl_indexed_sequence!(borrowed ['a, T] &'a Vec<T>);
impl_indexed_sequence!(borrowed ['a, T, const N: usize] &'a [T; N]);
impl_indexed_sequence!(borrowed ['a, T] &'a VecDeque<T>);

macro_rules! impl_range_sequence {
    ($($int:ty),* $(,)?) => {
        $(
            /// A half-open integer range; a range with `start > end` is empty.
            impl Sequence for Range<$int> {
                type Item = $int;
                type Cursor = $int;

                fn begin(&self) -> $int {
                    self.start
                }

                fn end(&self) -> $int {
                    self.end.max(self.start)
                }

                fn value_at(&self, cursor: &$int) -> Result<$int> {
                    if *cursor >= Sequence::end(self) {
                        return Err(Error::OutOfRange(DEREF_END));
                    }
                    Ok(*cursor)
                }

                fn advance(&self, cursor: &mut $int) -> Result<()> {
                    if *cursor >= Sequence::end(self) {
                        return Err(Error::OutOfRange(ADVANCE_END));
                    }
                    *cursor += 1;
                    Ok(())
                }

                fn retreat(&self, cursor: &mut $int) -> Result<()> {
                    if *cursor <= self.start {
                        return Err(Error::OutOfRange(RETREAT_BEGIN));
                    }
                    *cursor -= 1;
                    Ok(())
                }

                fn capabilities(&self) -> Capabilities {
                    Capabilities::SIZED | Capabilities::BIDIRECTIONAL
                }

                fn size(&self) -> Option<usize> {
                    let len = Sequence::end(self) as i128 - self.start as i128;
                    usize::try_from(len).ok()
                }
            }
        )*
    };
}

impl_range_sequence!(i32, i64, u32, u64, usize);

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;
