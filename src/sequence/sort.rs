//! Stable ascending sort by a projection.
//!
//! Projections return `Option<K>`: `None` stands for a missing key and sorts
//! after every present key that compares with itself. Two neighbours are only
//! swapped when the earlier one's key is strictly greater (`>`) than the later
//! one's, so equal keys keep their input order.
//!
//! The sort is an adjacent-swap pass that shrinks its window to the last swap
//! each round. With a partial order this matters: an element whose key does
//! not compare at all (such as `f64::NAN`) is never swapped, so it acts as a
//! barrier and neither it nor the elements around it cross each other.
//! A missing key is likewise never swapped past a self-incomparable key.
//!
//! Missing keys sort strictly after every present key, including
//! `f64::INFINITY`. There is no generic "largest value" for an arbitrary
//! `K: PartialOrd`, so a missing key cannot tie with one.

use crate::iteration::{PropertyAccess, map};

/// Returns `true` when `left` must be placed after `right`.
fn is_greater<K: PartialOrd>(left: Option<&K>, right: Option<&K>) -> bool {
    match (left, right) {
        (None, Some(right)) => right.partial_cmp(right).is_some(),
        (Some(left), Some(right)) => left > right,
        (_, None) => false,
    }
}

/// Sorts `sequence` ascending by `projection`, keeping equal keys in input order.
///
/// The projection is evaluated once per element. Returns a new vector; the
/// input is untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::sort_by;
///
/// let words = ["pear", "fig", "banana", "kiwi"];
/// let by_length = sort_by(&words, |word| Some(word.len()));
/// assert_eq!(by_length, vec!["fig", "pear", "kiwi", "banana"]);
///
/// // Missing keys go last.
/// let values = [Some(3), None, Some(1)];
/// assert_eq!(sort_by(&values, |value| *value), vec![Some(1), Some(3), None]);
/// ```
pub fn sort_by<T, K, P>(sequence: &[T], projection: P) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    P: Fn(&T) -> Option<K>,
{
    let mut keyed = map(sequence, |value| (projection(value), value.clone()));
    adjacent_swap_sort(&mut keyed);
    keyed
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

/// Sorts `sequence` ascending by the property called `name`.
///
/// Elements lacking the property sort last, in input order.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::sort_by_property;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("id", 1), ("age", 3)]),
///     HashMap::from([("id", 2)]),
///     HashMap::from([("id", 3), ("age", 1)]),
/// ];
/// let sorted = sort_by_property(&people, "age");
/// let ids: Vec<i32> = sorted.iter().map(|person| person["id"]).collect();
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn sort_by_property<T>(sequence: &[T], name: &str) -> Vec<T>
where
    T: Clone + PropertyAccess,
    T::Value: PartialOrd,
{
    let mut keyed = map(sequence, |value| (value.property(name), value));
    adjacent_swap_sort(&mut keyed);
    keyed
        .into_iter()
        .map(|(_, value)| value.clone())
        .collect()
}

fn adjacent_swap_sort<K: PartialOrd, T>(keyed: &mut [(Option<K>, T)]) {
    let mut active = keyed.len();
    while active > 1 {
        let mut last_swap = 0;
        for index in 1..active {
            if is_greater(keyed[index - 1].0.as_ref(), keyed[index].0.as_ref()) {
                keyed.swap(index - 1, index);
                last_swap = index;
            }
        }
        // Everything from the last swap onwards is already in place.
        active = last_swap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn test_sort_by_property_is_stable() {
        let records = vec![
            BTreeMap::from([("age", 3), ("tag", 0)]),
            BTreeMap::from([("age", 1), ("tag", 1)]),
            BTreeMap::from([("age", 1), ("tag", 2)]),
        ];
        let sorted = sort_by_property(&records, "age");
        let tags: Vec<i32> = sorted.iter().map(|record| record["tag"]).collect();
        assert_eq!(tags, vec![1, 2, 0]);
    }

    #[rstest]
    fn test_sort_by_missing_keys_keep_order_at_end() {
        let values = [(None, 'a'), (Some(2), 'b'), (None, 'c'), (Some(1), 'd')];
        let sorted = sort_by(&values, |pair| pair.0);
        let labels: String = sorted.iter().map(|pair| pair.1).collect();
        assert_eq!(labels, "dbac");
    }

    #[rstest]
    fn test_sort_by_nan_keys_do_not_panic() {
        let values = [2.0, f64::NAN, 1.0, f64::NAN, 0.5];
        let sorted = sort_by(&values, |value| Some(*value));
        assert_eq!(sorted.len(), values.len());
        assert_eq!(sorted.iter().filter(|value| value.is_nan()).count(), 2);
    }

    #[rstest]
    #[case(vec![3.0, f64::NAN, 1.0, 2.0], vec![3.0, f64::NAN, 1.0, 2.0])]
    #[case(vec![2.0, 1.0, f64::NAN, 4.0, 3.0], vec![1.0, 2.0, f64::NAN, 3.0, 4.0])]
    #[case(vec![f64::NAN, 5.0, 4.0], vec![f64::NAN, 4.0, 5.0])]
    fn test_sort_by_nan_key_is_a_barrier(#[case] input: Vec<f64>, #[case] expected: Vec<f64>) {
        let sorted = sort_by(&input, |value| Some(*value));
        let bits = |values: &[f64]| values.iter().map(|value| value.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&sorted), bits(&expected));
    }

    #[rstest]
    fn test_sort_by_missing_key_sorts_after_infinity() {
        let values = [(None, 'a'), (Some(f64::INFINITY), 'b'), (Some(1.0), 'c')];
        let sorted = sort_by(&values, |pair| pair.0);
        let labels: String = sorted.iter().map(|pair| pair.1).collect();
        assert_eq!(labels, "cba");
    }

    #[rstest]
    fn test_sort_by_missing_key_does_not_pass_nan() {
        let values = [(None, 'a'), (Some(f64::NAN), 'b'), (Some(1.0), 'c')];
        let sorted = sort_by(&values, |pair| pair.0);
        let labels: String = sorted.iter().map(|pair| pair.1).collect();
        assert_eq!(labels, "abc");
    }

    #[rstest]
    fn test_sort_by_empty_and_single() {
        assert!(sort_by(&Vec::<i32>::new(), |value| Some(*value)).is_empty());
        assert_eq!(sort_by(&[9], |value| Some(*value)), vec![9]);
    }

    #[rstest]
    #[case(None, None, false)]
    #[case(None, Some(1), true)]
    #[case(None, Some(i32::MAX), true)]
    #[case(Some(1), None, false)]
    #[case(Some(2), Some(1), true)]
    #[case(Some(1), Some(1), false)]
    fn test_is_greater(#[case] left: Option<i32>, #[case] right: Option<i32>, #[case] expected: bool) {
        assert_eq!(is_greater(left.as_ref(), right.as_ref()), expected);
    }
}
