//! Iteration kernel over sequences and key/value mappings.
//!
//! Every higher combinator in this crate is written in terms of the
//! primitives in this module. A [`Collection`] is either an ordered sequence
//! (slices, arrays and `Vec`, keyed by index) or an unordered mapping
//! (`HashMap`/`BTreeMap`, keyed by a reference to the map key).
//!
//! # Overview
//!
//! - [`each`]: Visit every `(value, key, collection)` triple
//! - [`map`], [`filter`], [`reject`]: Build new vectors from a collection
//! - [`reduce`], [`reduce_with`]: Fold a collection into a single value
//! - [`contains`], [`every`], [`some`], [`index_of`]: Membership and predicates
//! - [`pluck`], [`invoke`], [`invoke_method`]: Project or call over each element
//! - [`extend`], [`defaults`]: Merge mappings into an explicit target
//! - [`first`], [`last`], [`shuffle`]: Slice helpers
//!
//! # Examples
//!
//! ```rust
//! use underbar::iteration::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let doubled = map(&numbers, |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let even = filter(&numbers, |value| value % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//!
//! // Without a seed the first element becomes the accumulator.
//! let sum = reduce(&numbers, |total, value| total + value);
//! assert_eq!(sum, Some(10));
//! ```
//!
//! # Laws
//!
//! - **Map identity**: `map(c, |v| v.clone()) == filter(c, |_| true)`
//! - **Reject complement**: `filter(c, p) ++ reject(c, p)` is a permutation of `c`
//! - **Reduce seed**: `reduce(c, f) == reduce_with(&c[1..], c[0], f)` for non-empty `c`

mod access;
mod collection;
mod merge;
mod shuffle;
mod traversal;
mod utils;

pub use access::{first, first_n, index_of, last, last_n, pluck};
pub use collection::{Collection, Mapping, MethodAccess, PropertyAccess};
pub use merge::{defaults, extend};
pub use shuffle::{shuffle, shuffle_with};
pub use traversal::{
    contains, each, every, filter, invoke, invoke_method, map, reduce, reduce_with, reject, some,
};
pub use utils::identity;
