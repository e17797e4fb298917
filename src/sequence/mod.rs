//! Sequence combinators built on the iteration kernel.
//!
//! Every function in this module is pure: inputs are borrowed and never
//! mutated, and results are freshly allocated vectors.
//!
//! - [`uniq`], [`uniq_by`]: Deduplicate under strict equality of a projection
//! - [`flatten`]: Flatten a [`Nested`] sequence to arbitrary depth
//! - [`zip`], [`zip2`], [`zip3`]: Group elements by index, padding with `None`
//! - [`intersection`], [`difference`]: Set-like operations that keep order
//! - [`sort_by`], [`sort_by_property`]: Stable ascending sort by a projection
//!
//! # Examples
//!
//! ```rust
//! use underbar::nested;
//! use underbar::sequence::{difference, flatten, intersection, uniq};
//!
//! assert_eq!(uniq(&[1, 2, 2, 3, 3, 3], false), vec![1, 2, 3]);
//! assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
//! assert_eq!(intersection(&[&[1, 2, 3][..], &[2, 3, 4]]), vec![2, 3]);
//! assert_eq!(difference(&[1, 2, 3, 2], &[&[2]]), vec![1, 3]);
//! ```
//!
//! # Laws
//!
//! - **Uniq idempotence**: `uniq(uniq(s)) == uniq(s)`
//! - **Flatten idempotence**: `flatten(from_flat(flatten(x))) == flatten(x)`
//! - **Sort stability**: equal keys keep their input order
//! - **Difference subset**: every element of `difference(a, bs)` is in `a` and in no `b`

mod nested;
mod set;
mod sort;
mod uniq;
mod zip;

pub use nested::{Nested, flatten};
pub use set::{difference, intersection};
pub use sort::{sort_by, sort_by_property};
pub use uniq::{uniq, uniq_by};
pub use zip::{zip, zip2, zip3};
