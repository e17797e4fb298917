//! Equality/dedup engine.
//!
//! Two elements are duplicates when their projected values compare equal
//! under `PartialEq`. This is strict value equality, not structural
//! equivalence: a projected `f64::NAN` is never a duplicate of anything.
//!
//! The first occurrence of each group is kept, and output order follows
//! input order.

use crate::iteration::{each, identity};

/// Returns `sequence` without duplicates, keeping first occurrences.
///
/// When `is_sorted` is `true` the input is assumed to be grouped already,
/// so each element is only compared to the last accepted one (a single
/// linear pass). With an ungrouped input this removes fewer duplicates; the
/// grouping is the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 3, 3], false), vec![1, 2, 3]);
/// assert_eq!(uniq(&[1, 1, 2, 2, 3], true), vec![1, 2, 3]);
///
/// // Ungrouped input with the sorted fast path only collapses adjacent runs.
/// assert_eq!(uniq(&[1, 2, 1], true), vec![1, 2, 1]);
/// ```
pub fn uniq<T>(sequence: &[T], is_sorted: bool) -> Vec<T>
where
    T: PartialEq + Clone,
{
    uniq_by(sequence, is_sorted, identity)
}

/// Returns `sequence` without elements whose `projection` equals an
/// already accepted element's projection.
///
/// Without `is_sorted`, every candidate is compared against every accepted
/// element, which is quadratic in the worst case.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::uniq_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words, true, |word| word.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
///
/// let by_parity = uniq_by(&[1, 2, 3, 4], false, |value| value % 2);
/// assert_eq!(by_parity, vec![1, 2]);
/// ```
pub fn uniq_by<'a, T, K, P>(sequence: &'a [T], is_sorted: bool, projection: P) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    P: Fn(&'a T) -> K,
{
    let mut result: Vec<T> = Vec::new();
    if is_sorted {
        let mut last_key: Option<K> = None;
        each(sequence, |value, _, _| {
            let key = projection(value);
            if last_key.as_ref() != Some(&key) {
                result.push(value.clone());
                last_key = Some(key);
            }
        });
    } else {
        let mut accepted_keys: Vec<K> = Vec::new();
        each(sequence, |value, _, _| {
            let key = projection(value);
            if !accepted_keys.contains(&key) {
                result.push(value.clone());
                accepted_keys.push(key);
            }
        });
    }
    result
}
