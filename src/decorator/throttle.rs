//! Rate limiting with a single deferred trailing call.
//!
//! A [`Throttle`] has two phases:
//!
//! ```text
//!            call, window elapsed
//!           ┌──────────────────┐
//!           │   (run now)      │
//!           ▼                  │
//!         Idle ────────────────┘
//!          │ ▲
//!   call,  │ │ timer fires
//!   window │ │ (run with the arming
//!   open   │ │  call's arguments)
//!          ▼ │
//!         Armed ◄──── call (dropped)
//! ```
//!
//! - `Idle`, and at least `wait` has passed since the last execution (or
//!   there was none): run immediately.
//! - `Idle`, and the last execution was less than `wait` ago: arm a timer
//!   for the rest of the window plus the trailing slack, remembering this
//!   call's arguments.
//! - `Armed`: drop the call. The pending execution keeps the arguments of
//!   the call that armed it, not those of any later call.
//! - Timer fires: record the execution time, return to `Idle`, then run.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::Scheduler;

/// Timing parameters of a [`Throttle`].
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::ThrottleOptions;
/// use std::time::Duration;
///
/// let options = ThrottleOptions::from(Duration::from_millis(100));
/// assert_eq!(options.trailing_slack, ThrottleOptions::DEFAULT_TRAILING_SLACK);
///
/// let exact = options.with_trailing_slack(Duration::ZERO);
/// assert_eq!(exact.wait, Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Minimum time between two executions of the wrapped function.
    pub wait: Duration,
    /// Extra time added to a deferred execution's delay.
    pub trailing_slack: Duration,
}

impl ThrottleOptions {
    /// The slack used unless overridden: one millisecond.
    pub const DEFAULT_TRAILING_SLACK: Duration = Duration::from_millis(1);

    /// Creates options with the given window and the default slack.
    #[inline]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            trailing_slack: Self::DEFAULT_TRAILING_SLACK,
        }
    }

    /// Replaces the trailing slack.
    #[inline]
    #[must_use]
    pub const fn with_trailing_slack(self, trailing_slack: Duration) -> Self {
        Self {
            trailing_slack,
            ..self
        }
    }
}

impl From<Duration> for ThrottleOptions {
    fn from(wait: Duration) -> Self {
        Self::new(wait)
    }
}

/// What a single [`Throttle::call`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleOutcome {
    /// The wrapped function ran during the call.
    Executed,
    /// The call armed a timer; the function will run after `after`.
    Deferred {
        /// Delay handed to the scheduler.
        after: Duration,
    },
    /// A deferred execution was already pending; the call was discarded.
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
}

#[derive(Debug)]
struct ThrottleState {
    last_execution: Option<Duration>,
    phase: Phase,
}

/// A function that runs at most once per window, deferring one early call.
///
/// The wrapped function's return value is discarded. State is guarded by a
/// single mutex that is never held while the wrapped function runs, so the
/// deferred execution may happen on whatever thread the scheduler uses.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{ManualScheduler, ThrottleOutcome, throttle};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
/// let throttled = throttle(
///     move |value: &'static str| sink.lock().unwrap().push(value),
///     Duration::from_millis(100),
///     Arc::clone(&scheduler),
/// );
///
/// assert_eq!(throttled.call("t0"), ThrottleOutcome::Executed);
/// scheduler.advance(Duration::from_millis(30));
/// assert_eq!(
///     throttled.call("t30"),
///     ThrottleOutcome::Deferred { after: Duration::from_millis(71) }
/// );
/// scheduler.advance(Duration::from_millis(20));
/// assert_eq!(throttled.call("t50"), ThrottleOutcome::Dropped);
///
/// scheduler.advance(Duration::from_millis(51));
/// assert_eq!(*log.lock().unwrap(), vec!["t0", "t30"]);
/// ```
pub struct Throttle<F, S> {
    function: Arc<F>,
    scheduler: Arc<S>,
    options: ThrottleOptions,
    state: Arc<Mutex<ThrottleState>>,
}

/// Wraps `function` so that it runs at most once per `options.wait`.
///
/// Shorthand for [`Throttle::new`]; `options` may be a plain `Duration`.
pub fn throttle<F, S>(function: F, options: impl Into<ThrottleOptions>, scheduler: Arc<S>) -> Throttle<F, S>
where
    S: Scheduler + Send + Sync + 'static,
{
    Throttle::new(function, options, scheduler)
}

impl<F, S> Throttle<F, S>
where
    S: Scheduler + Send + Sync + 'static,
{
    /// Creates an idle throttle that has never executed.
    pub fn new(function: F, options: impl Into<ThrottleOptions>, scheduler: Arc<S>) -> Self {
        Self {
            function: Arc::new(function),
            scheduler,
            options: options.into(),
            state: Arc::new(Mutex::new(ThrottleState {
                last_execution: None,
                phase: Phase::Idle,
            })),
        }
    }

    /// Returns the timing parameters.
    #[inline]
    pub const fn options(&self) -> ThrottleOptions {
        self.options
    }

    /// Returns `true` while a deferred execution is pending.
    pub fn is_armed(&self) -> bool {
        self.state.lock().phase == Phase::Armed
    }

    /// Invokes the throttle.
    ///
    /// Runs the wrapped function now, defers it, or drops the call, per the
    /// module-level state machine.
    ///
    /// # Panics
    ///
    /// Propagates a panic from an immediate execution. The execution time
    /// is recorded before the function runs, so the window still applies.
    pub fn call<A, R>(&self, arguments: A) -> ThrottleOutcome
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
    {
        let now = self.scheduler.now();
        let mut state = self.state.lock();
        if state.phase == Phase::Armed {
            tracing::trace!("throttle: call dropped while armed");
            return ThrottleOutcome::Dropped;
        }

        let elapsed = state
            .last_execution
            .map(|last_execution| now.saturating_sub(last_execution));
        match elapsed {
            Some(elapsed) if elapsed < self.options.wait => {
                state.phase = Phase::Armed;
                drop(state);

                let after = self.options.wait - elapsed + self.options.trailing_slack;
                tracing::debug!(?elapsed, ?after, "throttle: armed trailing call");
                self.schedule_trailing(after, arguments);
                ThrottleOutcome::Deferred { after }
            }
            _ => {
                state.last_execution = Some(now);
                drop(state);

                tracing::trace!("throttle: executing immediately");
                let _ = (self.function)(arguments);
                ThrottleOutcome::Executed
            }
        }
    }

    fn schedule_trailing<A, R>(&self, after: Duration, arguments: A)
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
    {
        let function = Arc::clone(&self.function);
        let scheduler = Arc::clone(&self.scheduler);
        let state = Arc::clone(&self.state);
        self.scheduler.schedule_once(
            after,
            Box::new(move || {
                {
                    let mut state = state.lock();
                    state.last_execution = Some(scheduler.now());
                    state.phase = Phase::Idle;
                }
                tracing::trace!("throttle: running trailing call");
                let _ = function(arguments);
            }),
        );
    }
}

impl<F, S> fmt::Debug for Throttle<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("Throttle")
            .field("options", &self.options)
            .field("phase", &state.phase)
            .field("last_execution", &state.last_execution)
            .finish_non_exhaustive()
    }
}
