//! Adaptors and the `|` composition operator.
//!
//! An adaptor captures its parameters up front and is applied to a sequence
//! later. Lazy adaptors ([`crate::lazy`]) produce a new view, eager ones
//! ([`crate::terminal`]) consume the sequence and produce a value. Either way
//! `source | adaptor` means `adaptor.apply(source)`, so stages read left to
//! right:
//!
//! ```
//! use melbi_seq_core::{append, concat, count, seq};
//!
//! let n = seq(vec![1, 2]) | concat(vec![3, 4]) | append(5) | count();
//! assert_eq!(n, 5);
//! ```

/// A deferred operation over a source sequence of type `S`.
pub trait Adaptor<S> {
    type Output;

    fn apply(self, source: S) -> Self::Output;
}

/// Method form of the pipe, available on every type.
///
/// Useful for values that have no `|` operator of their own, such as a plain
/// `Vec` that has not been wrapped with [`crate::seq`].
///
/// ```
/// use melbi_seq_core::{Pipe, first};
///
/// assert_eq!(vec![7, 8].pipe(first()), Ok(7));
/// ```
pub trait Pipe: Sized {
    fn pipe<A: Adaptor<Self>>(self, adaptor: A) -> A::Output {
        adaptor.apply(self)
    }
}

impl<T> Pipe for T {}

/// Implements `Sequence | Adaptor` for a sequence type of this crate.
///
/// Takes the impl generics in brackets followed by the type.
macro_rules! impl_pipe {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*, Stage> core::ops::BitOr<Stage> for $ty
        where
            Stage: $crate::adaptor::Adaptor<$ty>,
        {
            type Output = Stage::Output;

            fn bitor(self, stage: Stage) -> Self::Output {
                stage.apply(self)
            }
        }
    };
}

pub(crate) use impl_pipe;
