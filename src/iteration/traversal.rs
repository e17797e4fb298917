//! Traversal primitives: `each` and everything expressed through it.
//!
//! `each` and `reduce_with` are the only functions here that touch
//! [`Collection::entries`] directly. Everything else is layered on top of
//! them, so any collection that can enumerate its entries gets the whole kernel.

use super::collection::{Collection, MethodAccess};

/// Calls `iterator(value, key, collection)` for every entry of `collection`.
///
/// Sequences are visited in index order. Mappings are visited in the map's
/// own iteration order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::each;
///
/// let letters = ["a", "b", "c"];
/// let mut seen = Vec::new();
/// each(&letters, |value, index, collection| {
///     seen.push(format!("{index}:{value}/{}", collection.len()));
/// });
/// assert_eq!(seen, vec!["0:a/3", "1:b/3", "2:c/3"]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}

/// Returns the result of applying `iterator` to every value, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 10), vec![10, 20, 30]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value) -> U,
{
    let mut result = Vec::with_capacity(collection.size());
    each(collection, |value, _, _| result.push(iterator(value)));
    result
}

/// Returns clones of the values that pass `test`, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |value| value % 2 == 1), vec![1, 3]);
/// ```
pub fn filter<'a, C, F>(collection: &'a C, mut test: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&'a C::Value) -> bool,
{
    let mut result = Vec::new();
    each(collection, |value, _, _| {
        if test(value) {
            result.push(value.clone());
        }
    });
    result
}

/// Returns clones of the values that fail `test`; the complement of [`filter`].
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |value| value % 2 == 1), vec![2, 4]);
/// ```
pub fn reject<'a, C, F>(collection: &'a C, mut test: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&'a C::Value) -> bool,
{
    filter(collection, |value| !test(value))
}

/// Folds `collection` into one value, seeding the accumulator with `initial`.
///
/// `reducer` is called once per entry, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reduce_with;
///
/// let sum = reduce_with(&[1, 2, 3], 0, |total, value| total + value);
/// assert_eq!(sum, 6);
/// ```
pub fn reduce_with<'a, C, B, F>(collection: &'a C, initial: B, mut reducer: F) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &'a C::Value) -> B,
{
    collection
        .entries()
        .fold(initial, |accumulator, (_, value)| reducer(accumulator, value))
}

/// Folds `collection` using its first value as the seed.
///
/// The reducer is never invoked for the first value; it only sees the
/// second value onwards. Returns `None` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reduce;
///
/// // The reducer is not applied to the single element.
/// assert_eq!(reduce(&[5], |total, value| total + value * value), Some(5));
/// assert_eq!(reduce(&[1, 2, 3], |total, value| total + value), Some(6));
/// assert_eq!(reduce(&Vec::<i32>::new(), |total, value| total + value), None);
/// ```
pub fn reduce<'a, C, F>(collection: &'a C, mut reducer: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &'a C::Value) -> C::Value,
{
    reduce_with(collection, None, |accumulator, value| match accumulator {
        None => Some(value.clone()),
        Some(current) => Some(reducer(current, value)),
    })
}

/// Returns `true` if any value equals `target` under `==`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    reduce_with(collection, false, |was_found, value| {
        was_found || value == target
    })
}

/// Returns `true` if every value passes `test`. Vacuously `true` when empty.
///
/// Once a value fails, `test` is not called for the remaining values.
pub fn every<'a, C, F>(collection: &'a C, mut test: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value) -> bool,
{
    reduce_with(collection, true, |matched, value| matched && test(value))
}

/// Returns `true` if at least one value passes `test`. `false` when empty.
///
/// Defined as the dual of [`every`]: no value fails the negated test.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::some;
///
/// assert!(some(&[1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// ```
pub fn some<'a, C, F>(collection: &'a C, mut test: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value) -> bool,
{
    !every(collection, |value| !test(value))
}

/// Applies `function` to every value together with a shared argument bundle.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::invoke;
///
/// let words = ["a", "bb"];
/// let padded = invoke(&words, |word, width: &usize| format!("{word:>pad$}", pad = *width), &3);
/// assert_eq!(padded, vec!["  a", " bb"]);
/// ```
pub fn invoke<'a, C, A, R, F>(collection: &'a C, mut function: F, arguments: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    A: ?Sized,
    F: FnMut(&'a C::Value, &A) -> R,
{
    map(collection, |value| function(value, arguments))
}

/// Calls the method called `name` on every value, passing the shared
/// argument bundle.
///
/// Values without that method contribute `None`. Use [`invoke`] to pass a
/// closure instead of a name.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::{MethodAccess, invoke_method};
///
/// struct Word(&'static str);
///
/// impl MethodAccess<str> for Word {
///     type Output = String;
///
///     fn call_method(&self, name: &str, suffix: &str) -> Option<String> {
///         match name {
///             "append" => Some(format!("{}{suffix}", self.0)),
///             "upper" => Some(self.0.to_uppercase()),
///             _ => None,
///         }
///     }
/// }
///
/// let words = [Word("ab"), Word("cd")];
/// assert_eq!(
///     invoke_method(&words, "append", "!"),
///     vec![Some("ab!".to_string()), Some("cd!".to_string())]
/// );
/// assert_eq!(invoke_method(&words, "reverse", ""), vec![None, None]);
/// ```
pub fn invoke_method<C, A>(
    collection: &C,
    name: &str,
    arguments: &A,
) -> Vec<Option<<C::Value as MethodAccess<A>>::Output>>
where
    C: Collection + ?Sized,
    C::Value: MethodAccess<A>,
    A: ?Sized,
{
    map(collection, |value| value.call_method(name, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeMap, HashMap};

    #[rstest]
    fn test_each_visits_in_index_order() {
        let mut visited = Vec::new();
        each(&vec![3, 1, 2], |value, index, _| visited.push((index, *value)));
        assert_eq!(visited, vec![(0, 3), (1, 1), (2, 2)]);
    }

    #[rstest]
    fn test_each_over_mapping_passes_keys() {
        let mapping = BTreeMap::from([("a", 1), ("b", 2)]);
        let mut visited = Vec::new();
        each(&mapping, |value, key, _| visited.push(format!("{key}={value}")));
        assert_eq!(visited, vec!["a=1", "b=2"]);
    }

    #[rstest]
    fn test_map_over_hash_map_values() {
        let mapping = HashMap::from([("a", 1), ("b", 2)]);
        let mut doubled = map(&mapping, |value| value * 2);
        doubled.sort_unstable();
        assert_eq!(doubled, vec![2, 4]);
    }

    #[rstest]
    fn test_reduce_skips_reducer_for_seed() {
        let mut calls = 0;
        let result = reduce(&[7], |total, value| {
            calls += 1;
            total + value
        });
        assert_eq!(result, Some(7));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_reduce_with_calls_reducer_for_every_value() {
        let mut calls = 0;
        let result = reduce_with(&[1, 2, 3], 10, |total, value| {
            calls += 1;
            total + value
        });
        assert_eq!(result, 16);
        assert_eq!(calls, 3);
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[2, 4], true)]
    #[case(&[2, 3], false)]
    fn test_every_even(#[case] values: &[i32], #[case] expected: bool) {
        assert_eq!(every(values, |value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[1, 3], false)]
    #[case(&[1, 4], true)]
    fn test_some_even(#[case] values: &[i32], #[case] expected: bool) {
        assert_eq!(some(values, |value| value % 2 == 0), expected);
    }

    #[rstest]
    fn test_every_stops_testing_after_failure() {
        let mut tested = Vec::new();
        every(&[1, 2, 3], |value| {
            tested.push(*value);
            *value < 2
        });
        assert_eq!(tested, vec![1, 2]);
    }

    #[rstest]
    fn test_contains_uses_equality_on_floats() {
        assert!(contains(&[0.5, 1.5], &1.5));
        assert!(!contains(&[f64::NAN], &f64::NAN));
    }

    struct Shape {
        width: u32,
        height: u32,
    }

    impl MethodAccess<u32> for Shape {
        type Output = u32;

        fn call_method(&self, name: &str, factor: &u32) -> Option<u32> {
            match name {
                "area" => Some(self.width * self.height * factor),
                "perimeter" => Some(2 * (self.width + self.height) * factor),
                _ => None,
            }
        }
    }

    #[rstest]
    #[case("area", vec![Some(2), Some(12)])]
    #[case("perimeter", vec![Some(6), Some(14)])]
    #[case("volume", vec![None, None])]
    fn test_invoke_method_by_name(#[case] name: &str, #[case] expected: Vec<Option<u32>>) {
        let shapes = [
            Shape { width: 1, height: 2 },
            Shape { width: 3, height: 4 },
        ];
        assert_eq!(invoke_method(&shapes, name, &1), expected);
    }

    #[rstest]
    fn test_invoke_method_agrees_with_closure_form() {
        let shapes = vec![Shape { width: 2, height: 5 }];
        let by_name = invoke_method(&shapes, "area", &3);
        let by_closure = invoke(&shapes, |shape, factor: &u32| shape.call_method("area", factor), &3);
        assert_eq!(by_name, by_closure);
    }

    #[rstest]
    fn test_reject_is_complement_of_filter() {
        let values = [1, 2, 3, 4, 5];
        let kept = filter(&values, |value| *value > 2);
        let dropped = reject(&values, |value| *value > 2);
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(dropped, vec![1, 2]);
    }
}
