//! # underbar
//!
//! Functional collection utilities, set-like sequence combinators, a stable
//! projection sort, and function decorators that control when and how often a
//! wrapped function runs.
//!
//! ## Overview
//!
//! - **Iteration**: `each`, `map`, `filter`, `reduce`, `contains`, `pluck`, ...
//!   over both sequences and key/value mappings
//! - **Sequence**: `uniq`, `flatten`, `zip`, `intersection`, `difference`, `sort_by`
//! - **Decorator**: `once`, `memoize`, `delay`, `throttle`, plus the scheduling
//!   port (`Clock`/`Scheduler`) that timer-driven decorators run on
//!
//! ## Feature Flags
//!
//! - `iteration`: The iteration kernel
//! - `sequence`: Dedup engine, sequence combinators and the stable sort
//! - `decorator`: Call-control decorators and `ManualScheduler`
//! - `async`: `TokioScheduler`, backed by the tokio timer
//! - `serde`: Serialization of `Nested` and `ArgumentKey`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let unique = uniq(&[1, 2, 2, 3, 3, 3], false);
//! assert_eq!(unique, vec![1, 2, 3]);
//!
//! let square = once(|value: i32| value * value);
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(9), 16);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every public item of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "iteration")]
    pub use crate::iteration::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

#[cfg(feature = "iteration")]
pub mod iteration;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "decorator")]
pub mod decorator;
