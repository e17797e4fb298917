//! The settled-flag plus cached-value cell shared by `Once` and `Memoize`.

use std::cell::RefCell;

/// A write-once cache that only fills after a computation returns normally.
///
/// No borrow is held while the computation runs, so the computation may
/// re-enter the owning decorator. If a re-entrant call settles the cell
/// first, the earlier value is kept.
pub(crate) struct SettledCell<R> {
    value: RefCell<Option<R>>,
}

impl<R> SettledCell<R> {
    pub(crate) const fn new() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl<R: Clone> SettledCell<R> {
    pub(crate) fn get(&self) -> Option<R> {
        self.value.borrow().clone()
    }

    /// Returns the cached value, computing and storing it on first use.
    pub(crate) fn get_or_settle<C>(&self, compute: C) -> R
    where
        C: FnOnce() -> R,
    {
        if let Some(value) = self.get() {
            return value;
        }
        let value = compute();
        self.value.borrow_mut().get_or_insert(value).clone()
    }

    /// Like [`get_or_settle`](Self::get_or_settle), but an `Err` leaves the
    /// cell empty.
    pub(crate) fn get_or_try_settle<C, E>(&self, compute: C) -> Result<R, E>
    where
        C: FnOnce() -> Result<R, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        let value = compute()?;
        Ok(self.value.borrow_mut().get_or_insert(value).clone())
    }
}
