//! Error types for the decorator module.

/// Errors raised while setting up a scheduler.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::SchedulerError;
///
/// assert_eq!(
///     SchedulerError::NoRuntime.to_string(),
///     "no tokio runtime is running on this thread"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// A runtime-backed scheduler was requested outside of a runtime.
    NoRuntime,
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime => write!(formatter, "no tokio runtime is running on this thread"),
        }
    }
}

impl std::error::Error for SchedulerError {}
