//! Eager adaptors that consume a sequence and produce a value.
//!
//! Terminal operations only rely on the cursor protocol. Where a capability
//! makes an operation cheaper (a reported size for `count`, reverse traversal
//! for `last`) it is used, otherwise the operation falls back to a forward walk.
//!
//! Closures passed to the factories need their argument types spelled out,
//! because the sequence they will run on is not known when the adaptor is
//! built: `first_where(|x: &i32| *x > 2)`.

mod collect;
mod element;
mod extrema;
mod reduce;

pub use collect::{To, ToArray, ToMap, ToMapWith, ToVec, to, to_array, to_map, to_map_with, to_vec};
pub use element::{
    ElementAt, ElementAtOrNone, First, FirstOrNone, FirstWhere, FirstWhereOrNone, Last,
    LastOrNone, LastWhere, LastWhereOrNone, element_at, element_at_or_none, first, first_or_none,
    first_where, first_where_or_none, last, last_or_none, last_where, last_where_or_none,
};
pub use extrema::{Extremum, max, max_by_key, min, min_by_key};
pub use reduce::{
    Aggregate, AggregateWith, All, Any, Average, Contains, Count, aggregate, aggregate_with, all,
    any, average, contains, count,
};
