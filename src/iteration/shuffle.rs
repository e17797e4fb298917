//! Random permutation of a sequence.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a randomly ordered copy of `sequence` using the thread-local RNG.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a copy of `sequence` permuted with the supplied random source.
///
/// Passing a seeded generator makes the permutation reproducible.
pub fn shuffle_with<T, R>(sequence: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(random);
    shuffled
}
