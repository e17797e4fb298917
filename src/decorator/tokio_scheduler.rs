//! A scheduler backed by the tokio timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Instant;

use super::error::SchedulerError;
use super::scheduler::{Clock, Scheduler, Task};

/// A [`Scheduler`] that spawns each task onto a tokio runtime after a sleep.
///
/// The clock reads `tokio::time::Instant`, so a runtime with paused time
/// (`#[tokio::test(start_paused = true)]`) drives both the clock and the
/// timers deterministically.
///
/// Each task runs inside its own spawned future. A panic in a task is caught
/// by tokio and reported on that future's join handle, which is detached, so
/// it never reaches the code that scheduled it.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{Scheduler, TokioScheduler};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let scheduler = TokioScheduler::try_current().expect("inside a runtime");
/// let (sender, receiver) = tokio::sync::oneshot::channel();
/// scheduler.schedule_once(
///     Duration::from_millis(5),
///     Box::new(move || {
///         let _ = sender.send("fired");
///     }),
/// );
/// assert_eq!(receiver.await, Ok("fired"));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
    origin: Instant,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto `handle`, with its clock origin
    /// at the current instant.
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            origin: Instant::now(),
        }
    }

    /// Creates a scheduler on the runtime this thread is running in.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NoRuntime`] when called outside a tokio runtime.
    pub fn try_current() -> Result<Self, SchedulerError> {
        let handle = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        Ok(Self::new(handle))
    }
}

impl Clock for TokioScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) {
        tracing::trace!(?delay, "tokio scheduler: task queued");
        let deadline = Instant::now() + delay;
        self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        });
    }
}
