//! Error type shared by every sequence operation.
//!
//! All failures are reported synchronously to the caller of the offending
//! operation. Nothing in the crate catches or retries them.

use thiserror::Error;

/// Failure of a cursor operation, a view construction or a terminal operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An unconditional `first`, `last`, `average`, `min` or `max` ran on a
    /// sequence without elements.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// A predicate-based `first` or `last` found no matching element.
    #[error("no element satisfies the predicate")]
    ItemNotFound,

    /// A position past the available elements was requested, or a cursor was
    /// moved or dereferenced outside of `[begin, end]`.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),

    /// A construction parameter violates its precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `retreat` was called on a sequence without reverse traversal.
    #[error("sequence does not support reverse traversal")]
    NotBidirectional,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
