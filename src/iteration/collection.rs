//! Collection abstractions consumed by the iteration kernel.
//!
//! - [`Collection`]: anything that can enumerate `(key, &value)` entries
//! - [`Mapping`]: a key/value collection that can also be written to
//! - [`PropertyAccess`]: string-keyed lookup used for property projections
//! - [`MethodAccess`]: string-keyed dispatch used by name-based invocation

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A finite collection of values that can be enumerated together with their keys.
///
/// Sequences (`[T]`, `[T; N]`, `Vec<T>`) are keyed by their `usize` index and
/// enumerate in index order. Mappings (`HashMap`, `BTreeMap`) are keyed by a
/// reference to the map key and enumerate in the map's own iteration order,
/// which callers must not depend on for `HashMap`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::Collection;
/// use std::collections::BTreeMap;
///
/// let sequence = vec!["a", "b"];
/// let keys: Vec<usize> = sequence.entries().map(|(index, _)| index).collect();
/// assert_eq!(keys, vec![0, 1]);
///
/// let mapping = BTreeMap::from([("x", 1), ("y", 2)]);
/// let keys: Vec<&&str> = mapping.entries().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec![&"x", &"y"]);
/// ```
pub trait Collection {
    /// The key that identifies an entry (an index or a map key reference).
    type Key<'a>
    where
        Self: 'a;

    /// The element type stored in the collection.
    type Value;

    /// Enumerates every entry as a `(key, &value)` pair.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)>;

    /// Returns the number of entries.
    fn size(&self) -> usize;
}

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// A key/value collection with unique keys that can be read and written.
///
/// This is the target type of [`extend`](super::extend) and
/// [`defaults`](super::defaults).
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Enumerates every `(key, value)` pair.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Returns `true` if the mapping holds `key`.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Stores `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: Self::Key, value: Self::Value);
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Lookup of a named property on a structured value.
///
/// Property-name projections (`pluck`, `sort_by_property`) resolve through
/// this trait. It is implemented for string-keyed maps; record types can
/// implement it by matching on the field name.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::PropertyAccess;
///
/// struct Person {
///     age: u32,
/// }
///
/// impl PropertyAccess for Person {
///     type Value = u32;
///
///     fn property(&self, name: &str) -> Option<&u32> {
///         match name {
///             "age" => Some(&self.age),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { age: 30 };
/// assert_eq!(person.property("age"), Some(&30));
/// assert_eq!(person.property("name"), None);
/// ```
pub trait PropertyAccess {
    /// The type of the property values.
    type Value;

    /// Returns the property called `name`, or `None` when it is absent.
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<K, V, S> PropertyAccess for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> PropertyAccess for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Dispatch of a named method on a value.
///
/// This is the name-based counterpart of passing a closure to
/// [`invoke`](super::invoke); [`invoke_method`](super::invoke_method) resolves
/// the name on every element through this trait. `A` is the shared argument
/// bundle handed to every call.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::MethodAccess;
///
/// struct Counter {
///     count: i64,
/// }
///
/// impl MethodAccess<i64> for Counter {
///     type Output = i64;
///
///     fn call_method(&self, name: &str, step: &i64) -> Option<i64> {
///         match name {
///             "add" => Some(self.count + step),
///             "scale" => Some(self.count * step),
///             _ => None,
///         }
///     }
/// }
///
/// let counter = Counter { count: 4 };
/// assert_eq!(counter.call_method("scale", &3), Some(12));
/// assert_eq!(counter.call_method("reset", &0), None);
/// ```
pub trait MethodAccess<A: ?Sized> {
    /// The result type of the dispatched methods.
    type Output;

    /// Calls the method called `name` with `arguments`, or returns `None`
    /// when there is no such method.
    fn call_method(&self, name: &str, arguments: &A) -> Option<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sequence_entries_are_indexed() {
        let values = [10, 20, 30];
        let entries: Vec<(usize, &i32)> = values.entries().collect();
        assert_eq!(entries, vec![(0, &10), (1, &20), (2, &30)]);
        assert_eq!(values.size(), 3);
    }

    #[rstest]
    fn test_slice_and_vec_agree() {
        let values = vec![1, 2];
        let slice: &[i32] = &values;
        assert_eq!(
            slice.entries().collect::<Vec<_>>(),
            values.entries().collect::<Vec<_>>()
        );
    }

    #[rstest]
    fn test_mapping_has_key_and_assign() {
        let mut mapping: BTreeMap<&str, i32> = BTreeMap::new();
        assert!(!mapping.has_key(&"a"));
        mapping.assign("a", 1);
        mapping.assign("a", 2);
        assert!(mapping.has_key(&"a"));
        assert_eq!(mapping.get("a"), Some(&2));
    }

    #[rstest]
    fn test_property_access_on_string_keys() {
        let record: HashMap<String, i32> = HashMap::from([("age".to_string(), 3)]);
        assert_eq!(record.property("age"), Some(&3));
        assert_eq!(record.property("missing"), None);

        let borrowed: BTreeMap<&str, i32> = BTreeMap::from([("age", 5)]);
        assert_eq!(borrowed.property("age"), Some(&5));
    }
}
