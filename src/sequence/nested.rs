//! Arbitrarily nested sequences and flattening.
//!
//! A [`Nested<T>`] is either a leaf value or a sequence of further nested
//! values. The [`nested!`](crate::nested) macro builds them from bracket
//! literals, and [`flatten`] collapses them back into a flat vector.

/// A value that is either a leaf or a sequence of nested values.
///
/// With the `serde` feature, `Nested` (de)serializes untagged: a JSON array
/// becomes a [`Nested::Sequence`] and anything else a [`Nested::Leaf`].
/// Because arrays are tried first, a leaf type that itself deserializes from
/// an array is read as a sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::Nested;
///
/// let value = Nested::Sequence(vec![Nested::Leaf(1), Nested::Leaf(2)]);
/// assert_eq!(value.depth(), 1);
/// assert!(!value.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Nested<T> {
    /// A nested sequence.
    Sequence(Vec<Nested<T>>),
    /// A single non-sequence value.
    Leaf(T),
}

impl<T> Nested<T> {
    /// Lifts a flat vector into a sequence of leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::sequence::{Nested, flatten};
    ///
    /// let lifted = Nested::from_flat(vec![1, 2, 3]);
    /// assert_eq!(flatten(&lifted), vec![1, 2, 3]);
    /// ```
    pub fn from_flat(values: Vec<T>) -> Vec<Self> {
        values.into_iter().map(Nested::Leaf).collect()
    }

    /// Returns `true` for [`Nested::Leaf`].
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the maximum sequence nesting depth; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Self, usize)> = vec![(self, 0)];
        while let Some((current, level)) = pending.pop() {
            if let Self::Sequence(children) = current {
                deepest = deepest.max(level + 1);
                pending.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Flattens nested sequences to any depth, left to right, depth first.
///
/// Every leaf appears exactly once in the output, in the order a
/// depth-first walk visits it. Traversal uses an explicit stack, so very deep
/// nesting does not grow the call stack.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::sequence::flatten;
///
/// assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
/// assert_eq!(flatten::<i32>(&nested![[], [[]]]), Vec::<i32>::new());
/// ```
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(sequence.len());
    let mut pending = vec![sequence.iter()];
    while let Some(current) = pending.last_mut() {
        match current.next() {
            Some(Nested::Leaf(value)) => result.push(value.clone()),
            Some(Nested::Sequence(children)) => pending.push(children.iter()),
            None => {
                pending.pop();
            }
        }
    }
    result
}

/// Builds a `Vec<Nested<T>>` from a bracketed literal.
///
/// Brackets open a nested sequence; every other token tree is a leaf
/// expression. Leaves made of several tokens (such as `-1`) must be wrapped
/// in parentheses.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::sequence::Nested;
///
/// let value = nested![1, [2, (-3)]];
/// assert_eq!(
///     value,
///     vec![
///         Nested::Leaf(1),
///         Nested::Sequence(vec![Nested::Leaf(2), Nested::Leaf(-3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt)*]) => {
        $crate::sequence::Nested::Sequence($crate::nested![$($inner)*])
    };
    (@element $leaf:expr) => {
        $crate::sequence::Nested::Leaf($leaf)
    };
    ($($element:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@element $element)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_mixed_depths() {
        let input = nested![1, [2], [3, [[4]]]];
        assert_eq!(flatten(&input), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flatten_already_flat_is_noop() {
        let flat = vec![1, 2, 3];
        assert_eq!(flatten(&Nested::from_flat(flat.clone())), flat);
    }

    #[rstest]
    fn test_flatten_deep_nesting_does_not_overflow() {
        let mut value = Nested::Leaf(7);
        for _ in 0..100_000 {
            value = Nested::Sequence(vec![value]);
        }
        let input = vec![value];
        assert_eq!(flatten(&input), vec![7]);
        // Dropping a 100k-deep tree recursively would overflow; unwind it by hand.
        let mut current = input.into_iter().next();
        while let Some(Nested::Sequence(mut children)) = current {
            current = children.pop();
        }
    }

    #[rstest]
    #[case(Nested::Leaf(1), 0)]
    #[case(Nested::Sequence(vec![]), 1)]
    #[case(Nested::Sequence(vec![Nested::Leaf(1), Nested::Sequence(vec![Nested::Leaf(2)])]), 2)]
    fn test_depth(#[case] value: Nested<i32>, #[case] expected: usize) {
        assert_eq!(value.depth(), expected);
    }

    #[rstest]
    fn test_macro_trailing_comma_and_strings() {
        let value = nested!["a", ["b",],];
        assert_eq!(flatten(&value), vec!["a", "b"]);
    }
}
