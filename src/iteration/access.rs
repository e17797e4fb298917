//! Positional access helpers for sequences, plus property plucking.

use super::collection::{Collection, PropertyAccess};
use super::traversal::{each, map};

/// Returns the first element, or `None` for an empty slice.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements, or the whole slice if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty slice.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, or the whole slice if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Returns the key of the first value equal to `target`, or `None`.
///
/// For sequences the key is the index.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<'a, C>(collection: &'a C, target: &C::Value) -> Option<C::Key<'a>>
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    let mut result = None;
    each(collection, |value, key, _| {
        if result.is_none() && value == target {
            result = Some(key);
        }
    });
    result
}

/// Extracts the property called `name` from every element.
///
/// Elements without the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "30")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some("30"), None]);
/// ```
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Value as PropertyAccess>::Value>>
where
    C: Collection + ?Sized,
    C::Value: PropertyAccess,
    <C::Value as PropertyAccess>::Value: Clone,
{
    map(collection, |item| item.property(name).cloned())
}
