//! Fire-and-forget deferred invocation.

use std::time::Duration;

use super::scheduler::Scheduler;

/// Schedules `function(arguments)` to run once, no earlier than `wait` from now.
///
/// Returns immediately. The result of `function` is discarded, and there is
/// no way to cancel the call once scheduled.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{ManualScheduler, delay};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let total = Arc::new(AtomicUsize::new(0));
/// let target = Arc::clone(&total);
///
/// delay(
///     &scheduler,
///     Duration::from_millis(500),
///     move |(left, right): (usize, usize)| target.fetch_add(left + right, Ordering::SeqCst),
///     (1, 2),
/// );
///
/// scheduler.advance(Duration::from_millis(499));
/// assert_eq!(total.load(Ordering::SeqCst), 0);
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(total.load(Ordering::SeqCst), 3);
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, wait: Duration, function: F, arguments: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    tracing::trace!(?wait, "delay: scheduling call");
    scheduler.schedule_once(
        wait,
        Box::new(move || {
            let _ = function(arguments);
        }),
    );
}
