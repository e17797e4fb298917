//! Small helper functions shared by the kernel and the combinators.

/// Returns the value unchanged.
///
/// Used as the default projection wherever a combinator accepts an optional
/// projection (for example [`uniq`](crate::sequence::uniq), which is
/// [`uniq_by`](crate::sequence::uniq_by) with an identity projection).
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use underbar::iteration::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn test_identity_returns_argument(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn test_identity_moves_owned_values() {
        let text = String::from("owned");
        assert_eq!(identity(text), "owned");
    }
}
