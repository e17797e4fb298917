//! Call-control decorators.
//!
//! Each decorator wraps a caller-supplied function and returns a value whose
//! `call` method runs that function with altered invocation semantics. The
//! decorator owns all of its state privately; separate decorations never
//! share state.
//!
//! - [`Once`] / [`once`]: Run at most once and replay the first result
//! - [`Memoize`] / [`memoize`]: Run at most once per distinct argument list
//! - [`delay`]: Run once, later, on a [`Scheduler`]
//! - [`Throttle`] / [`throttle`]: Run at most once per window, deferring the
//!   first call that arrives too early
//!
//! # Arguments
//!
//! Wrapped functions take a single argument value. Functions of several
//! arguments take a tuple:
//!
//! ```rust
//! use underbar::decorator::memoize;
//!
//! let add = memoize(|(left, right): (i64, i64)| left + right);
//! assert_eq!(add.call((2, 3)), 5);
//! ```
//!
//! # Failure
//!
//! A decorator only settles after the wrapped function returns. If it
//! panics, the panic unwinds through `call` and the decorator stays
//! unsettled. Functions returning `Result` can use `try_call`, which settles
//! on `Ok` and hands `Err` back without settling.
//!
//! # Time
//!
//! Timer-driven decorators never sleep. They schedule work on a
//! [`Scheduler`]: [`ManualScheduler`] advances virtual time explicitly (for
//! tests and simulations), and `TokioScheduler` (feature `async`) uses the
//! tokio timer.

mod cell;
mod delay;
mod error;
mod key;
mod manual;
mod memoize;
mod once;
mod scheduler;
mod throttle;
#[cfg(feature = "async")]
mod tokio_scheduler;

pub use delay::delay;
pub use error::SchedulerError;
pub use key::{ArgumentKey, CanonicalArguments, Primitive};
pub use manual::ManualScheduler;
pub use memoize::{Memoize, memoize};
pub use once::{Once, once};
pub use scheduler::{Clock, Scheduler, Task};
pub use throttle::{Throttle, ThrottleOptions, ThrottleOutcome, throttle};
#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;
