//! Set-like operations on sequences.
//!
//! Membership is tested with the kernel's [`contains`], i.e. strict `==`.
//! Neither operation reorders its input.

use super::uniq::uniq;
use crate::iteration::{contains, every, filter, reject, some};

/// Returns the distinct elements present in every input sequence.
///
/// Candidates are the deduplicated concatenation of all inputs, so the
/// output follows first-occurrence order across the inputs. With no inputs
/// the result is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::intersection;
///
/// assert_eq!(intersection(&[&[1, 2, 3][..], &[2, 3, 4]]), vec![2, 3]);
/// assert_eq!(intersection(&[&[3, 2, 2, 1][..], &[1, 2, 3]]), vec![3, 2, 1]);
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let candidates = uniq(&sequences.concat(), false);
    filter(&candidates, |candidate| {
        every(sequences, |sequence| contains(*sequence, candidate))
    })
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// Order and multiplicity of `sequence` are preserved: each occurrence is
/// tested on its own and kept when absent from every other sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 2], &[&[2]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1, 4], &[&[2], &[3]]), vec![1, 1, 4]);
/// ```
pub fn difference<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    reject(sequence, |value| {
        some(others, |other| contains(*other, value))
    })
}
