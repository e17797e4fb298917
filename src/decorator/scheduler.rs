//! The scheduling port used by timer-driven decorators.
//!
//! Decorators never read the wall clock or sleep on their own. They ask a
//! [`Clock`] for the current time and hand deferred work to a
//! [`Scheduler`], which makes them deterministic under a simulated clock.

use std::sync::Arc;
use std::time::Duration;

/// A one-shot unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A monotonic time source.
pub trait Clock {
    /// Returns the time elapsed since the clock's origin.
    ///
    /// Successive calls never go backwards.
    fn now(&self) -> Duration;
}

/// A facility that runs a task once, no earlier than a given delay from now.
///
/// Scheduled tasks cannot be cancelled; every task eventually runs.
/// What happens when a task panics is up to the implementation.
pub trait Scheduler: Clock {
    /// Schedules `task` to run once after at least `delay`.
    fn schedule_once(&self, delay: Duration, task: Task);
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule_once(&self, delay: Duration, task: Task) {
        (**self).schedule_once(delay, task);
    }
}
