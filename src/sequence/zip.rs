//! Index-wise grouping of several sequences.
//!
//! The output is as long as the longest input. Positions past the end of a
//! shorter input are `None`, the "absent" marker.

use crate::iteration::{each, map, reduce_with};

/// Zips any number of sequences of the same element type.
///
/// Row `i` holds element `i` of every input, in input order.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::zip;
///
/// let rows = zip(&[&["a", "b", "c"][..], &["x", "y"]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some("a"), Some("x")],
///         vec![Some("b"), Some("y")],
///         vec![Some("c"), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let length = reduce_with(sequences, 0_usize, |longest, sequence| {
        longest.max(sequence.len())
    });
    let mut rows = Vec::with_capacity(length);
    for index in 0..length {
        let mut row = Vec::with_capacity(sequences.len());
        each(sequences, |sequence, _, _| {
            row.push(sequence.get(index).cloned());
        });
        rows.push(row);
    }
    rows
}

/// Zips two sequences of possibly different element types into pairs.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::zip2;
///
/// let pairs = zip2(&['a', 'b', 'c'], &[1, 2]);
/// assert_eq!(
///     pairs,
///     vec![(Some('a'), Some(1)), (Some('b'), Some(2)), (Some('c'), None)]
/// );
/// ```
pub fn zip2<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let length = first.len().max(second.len());
    let indices: Vec<usize> = (0..length).collect();
    map(&indices, |&index| {
        (first.get(index).cloned(), second.get(index).cloned())
    })
}

/// Zips three sequences of possibly different element types into triples.
pub fn zip3<A: Clone, B: Clone, C: Clone>(
    first: &[A],
    second: &[B],
    third: &[C],
) -> Vec<(Option<A>, Option<B>, Option<C>)> {
    let length = first.len().max(second.len()).max(third.len());
    let indices: Vec<usize> = (0..length).collect();
    map(&indices, |&index| {
        (
            first.get(index).cloned(),
            second.get(index).cloned(),
            third.get(index).cloned(),
        )
    })
}
