//! Mapping merges: [`extend`] and [`defaults`].
//!
//! These are the only kernel functions that write, and they only write to
//! the explicit `target` argument. Sources are never modified.

use super::collection::Mapping;

/// Copies every entry of every source into `target`.
///
/// Sources are applied left to right, so later sources win on key clashes.
/// Returns `target` for chaining.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("key1", "something")]);
/// let second = BTreeMap::from([("key2", "new"), ("key1", "replaced")]);
/// let third = BTreeMap::from([("key3", "more")]);
///
/// extend(&mut target, &[&second, &third]);
/// assert_eq!(target.get("key1"), Some(&"replaced"));
/// assert_eq!(target.len(), 3);
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.assign(key.clone(), value.clone());
        }
    }
    target
}

/// Like [`extend`], but never overwrites a key `target` already holds.
///
/// When several sources share a key that `target` lacks, the first source wins.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::defaults;
/// use std::collections::BTreeMap;
///
/// let mut options = BTreeMap::from([("zoom", 1)]);
/// defaults(&mut options, &[&BTreeMap::from([("zoom", 5), ("speed", 2)])]);
/// assert_eq!(options.get("zoom"), Some(&1));
/// assert_eq!(options.get("speed"), Some(&2));
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if !target.has_key(key) {
                target.assign(key.clone(), value.clone());
            }
        }
    }
    target
}
