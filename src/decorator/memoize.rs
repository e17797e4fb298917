//! Per-argument-list memoization.
//!
//! [`Memoize`] keeps one settled cell per distinct [`ArgumentKey`]. Each cell
//! behaves like its own [`Once`](super::Once): it is created the first time
//! its key is seen, runs the wrapped function once, and replays the result.
//!
//! The cache is never evicted. Memoize pure functions over a finite domain;
//! for an unbounded argument space the cache grows with every new key.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::cell::SettledCell;
use super::key::{ArgumentKey, CanonicalArguments};

/// A function whose results are cached per canonical argument list.
///
/// The cache borrow is released before the wrapped function runs, so the
/// wrapped function may call back into the same decorator.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = memoize(|value: i64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(5), 25);
/// assert_eq!(calls.get(), 2);
/// assert_eq!(square.len(), 2);
/// ```
pub struct Memoize<F, R> {
    function: F,
    cache: RefCell<HashMap<ArgumentKey, Rc<SettledCell<R>>>>,
}

/// Wraps `function` so that it runs at most once per distinct argument list.
///
/// Shorthand for [`Memoize::new`].
#[inline]
pub fn memoize<F, R>(function: F) -> Memoize<F, R> {
    Memoize::new(function)
}

impl<F, R> Memoize<F, R> {
    /// Creates a decorator with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the number of distinct argument lists seen so far.
    ///
    /// An argument list whose call panicked or returned `Err` still counts;
    /// its entry is simply unsettled.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if the decorator has never been called.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Returns whether a result is cached for `arguments`.
    pub fn is_cached<A: CanonicalArguments + ?Sized>(&self, arguments: &A) -> bool {
        self.cache
            .borrow()
            .get(&arguments.canonical_key())
            .is_some_and(|entry| entry.is_settled())
    }

    fn entry(&self, key: ArgumentKey) -> Rc<SettledCell<R>> {
        let mut cache = self.cache.borrow_mut();
        let size = cache.len();
        Rc::clone(cache.entry(key).or_insert_with(|| {
            tracing::debug!(cache_size = size + 1, "memoize: new argument key");
            Rc::new(SettledCell::new())
        }))
    }
}

impl<F, R: Clone> Memoize<F, R> {
    /// Returns the cached result for `arguments`, calling the wrapped
    /// function if this argument list has no settled result yet.
    ///
    /// # Panics
    ///
    /// Propagates a panic from the wrapped function; the entry for
    /// `arguments` stays unsettled and the next call retries.
    pub fn call<A>(&self, arguments: A) -> R
    where
        A: CanonicalArguments,
        F: Fn(A) -> R,
    {
        let entry = self.entry(arguments.canonical_key());
        entry.get_or_settle(|| (self.function)(arguments))
    }

    /// Calls a fallible wrapped function, caching only `Ok` results.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged; nothing is cached for
    /// `arguments` in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::decorator::memoize;
    ///
    /// let checked_half = memoize(|value: i32| {
    ///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
    /// });
    /// assert_eq!(checked_half.try_call(3), Err("3 is odd".to_string()));
    /// assert!(!checked_half.is_cached(&3));
    /// assert_eq!(checked_half.try_call(8), Ok(4));
    /// assert!(checked_half.is_cached(&8));
    /// ```
    pub fn try_call<A, E>(&self, arguments: A) -> Result<R, E>
    where
        A: CanonicalArguments,
        F: Fn(A) -> Result<R, E>,
    {
        let entry = self.entry(arguments.canonical_key());
        entry.get_or_try_settle(|| (self.function)(arguments))
    }
}

impl<F, R> fmt::Debug for Memoize<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
