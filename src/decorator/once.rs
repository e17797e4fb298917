//! At-most-once invocation.
//!
//! A [`Once`] runs its wrapped function on the first call and replays that
//! call's result on every later call, whatever the later arguments are.

use std::fmt;

use super::cell::SettledCell;

/// A function that runs at most once and then keeps returning its first result.
///
/// The decorator settles only when the wrapped function returns. A panic
/// during the first call propagates and leaves it unsettled, so a later call
/// runs the function again.
///
/// `Once` is not `Sync`; share it between threads behind your own lock.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `R` - The cached result type
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let initialize = once(|value: i32| {
///     calls.set(calls.get() + 1);
///     value * 10
/// });
///
/// assert_eq!(initialize.call(1), 10);
/// assert_eq!(initialize.call(2), 10);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<F, R> {
    function: F,
    cell: SettledCell<R>,
}

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<F, R>(function: F) -> Once<F, R> {
    Once::new(function)
}

impl<F, R> Once<F, R> {
    /// Creates an unsettled decorator around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            cell: SettledCell::new(),
        }
    }

    /// Returns whether a call has completed successfully.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.cell.is_settled()
    }
}

impl<F, R: Clone> Once<F, R> {
    /// Returns the cached result without calling the function.
    pub fn get(&self) -> Option<R> {
        self.cell.get()
    }

    /// Calls the wrapped function the first time and returns the cached
    /// result afterwards.
    ///
    /// # Panics
    ///
    /// Propagates a panic from the wrapped function; the decorator stays
    /// unsettled in that case.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.cell.get_or_settle(|| {
            tracing::trace!("once: running wrapped function");
            (self.function)(arguments)
        })
    }

    /// Calls a fallible wrapped function, settling only on `Ok`.
    ///
    /// Once settled, every later call returns `Ok` with the cached value.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged while the decorator is
    /// unsettled. The next call tries again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::decorator::once;
    ///
    /// let parse = once(|text: &str| text.parse::<i32>());
    /// assert!(parse.try_call("not a number").is_err());
    /// assert_eq!(parse.try_call("42"), Ok(42));
    /// assert_eq!(parse.try_call("7"), Ok(42));
    /// ```
    pub fn try_call<A, E>(&self, arguments: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
    {
        self.cell.get_or_try_settle(|| {
            tracing::trace!("once: running fallible wrapped function");
            (self.function)(arguments)
        })
    }
}

impl<F, R: fmt::Debug + Clone> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => formatter.debug_tuple("Once").field(&value).finish(),
            None => formatter.debug_tuple("Once").field(&"<unsettled>").finish(),
        }
    }
}
