//! A scheduler driven by explicitly advanced virtual time.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::{Clock, Scheduler, Task};

struct ManualState {
    now: Duration,
    next_sequence: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

/// A [`Scheduler`] whose clock only moves when told to.
///
/// Time starts at zero. [`advance`](Self::advance) moves the clock forward
/// and runs every task that falls due on the way, in due-time order and,
/// for equal due times, in scheduling order. While a task runs, [`now`]
/// reports that task's due time, and tasks it schedules run within the same
/// advance if they fall due before its target.
///
/// Tasks run on the thread calling `advance`, outside the internal lock. A
/// panicking task unwinds out of `advance`; tasks after it stay queued.
///
/// [`now`]: Clock::now
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{Clock, ManualScheduler, Scheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// scheduler.schedule_once(
///     Duration::from_millis(10),
///     Box::new(move || flag.store(true, Ordering::SeqCst)),
/// );
///
/// scheduler.advance(Duration::from_millis(9));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// assert_eq!(scheduler.now(), Duration::from_millis(10));
/// ```
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    /// Creates a scheduler at time zero with nothing queued.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(ManualState {
                now: Duration::ZERO,
                next_sequence: 0,
                queue: BTreeMap::new(),
            }),
        }
    }

    /// Moves the clock forward by `step`, running every task due by then.
    pub fn advance(&self, step: Duration) {
        let target = self.now() + step;
        self.advance_to(target);
    }

    /// Moves the clock to `target`, running every task due by then.
    ///
    /// A `target` in the past leaves the clock where it is.
    pub fn advance_to(&self, target: Duration) {
        loop {
            let task = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .first_key_value()
                    .is_some_and(|(&(due, _), _)| due <= target);
                if !due {
                    state.now = state.now.max(target);
                    return;
                }
                let Some(((due, sequence), task)) = state.queue.pop_first() else {
                    return;
                };
                state.now = state.now.max(due);
                tracing::trace!(?due, sequence, "manual scheduler: running task");
                task
            };
            task();
        }
    }

    /// Returns the number of tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualScheduler {
    fn now(&self) -> Duration {
        self.state.lock().now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) {
        let mut state = self.state.lock();
        let due = state.now + delay;
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        tracing::trace!(?due, sequence, "manual scheduler: task queued");
        state.queue.insert((due, sequence), task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}
