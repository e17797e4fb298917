//! Canonical encoding of argument lists for memoization.
//!
//! An argument list is encoded as an ordered sequence of [`Primitive`]
//! values, the [`ArgumentKey`]. Two argument lists share a cache entry
//! exactly when their keys are equal.
//!
//! Encoding rules:
//!
//! - Every integer type becomes [`Primitive::Int`], so `1u8` and `1i64` are
//!   the same key.
//! - `f32` and `f64` become [`Primitive::Float`] holding the `f64` bit
//!   pattern: `0.0` and `-0.0` are different keys, and a `NaN` matches a
//!   `NaN` with the same bits. `1.0` and `1` are different keys.
//!
//!   This differs from keying by serialized JSON text, where `0.0`
//!   and `-0.0` share a key and every `NaN` or infinity collapses into
//!   `null`. Here `NaN`, `None` and the infinities are all distinct keys.
//! - `()` is [`Primitive::Unit`] and `None` is [`Primitive::Null`]; `Some(x)`
//!   encodes as `x`.
//! - Tuples encode their fields left to right. Nested tuples are flattened,
//!   so `((1, 2), 3)` and `(1, (2, 3))` share a key.
//!
//! Only types with a [`CanonicalArguments`] impl can be memoized. Anything
//! else (collections, references to structured data, cyclic values) is
//! rejected at compile time.

use smallvec::SmallVec;

/// One primitive component of an [`ArgumentKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// The unit value `()`.
    Unit,
    /// An absent optional value.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any integer, widened to `i128`.
    Int(i128),
    /// A float, as the bit pattern of its `f64` value.
    Float(u64),
    /// A character.
    Char(char),
    /// A string.
    Str(String),
}

/// The canonical key of an argument list.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{CanonicalArguments, Primitive};
///
/// let key = (1_u8, "a", true).canonical_key();
/// assert_eq!(
///     key.components(),
///     &[Primitive::Int(1), Primitive::Str("a".to_string()), Primitive::Bool(true)]
/// );
/// assert_eq!((1_i64, "a", true).canonical_key(), key);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgumentKey(SmallVec<[Primitive; 4]>);

impl ArgumentKey {
    /// Creates an empty key.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one component.
    #[inline]
    pub fn push(&mut self, primitive: Primitive) {
        self.0.push(primitive);
    }

    /// Returns the components in order.
    #[inline]
    pub fn components(&self) -> &[Primitive] {
        &self.0
    }
}

/// Types that can be encoded into an [`ArgumentKey`].
pub trait CanonicalArguments {
    /// Appends this value's components to `key`.
    fn encode(&self, key: &mut ArgumentKey);

    /// Returns the key of this value alone.
    fn canonical_key(&self) -> ArgumentKey {
        let mut key = ArgumentKey::new();
        self.encode(&mut key);
        key
    }
}

impl<T: CanonicalArguments + ?Sized> CanonicalArguments for &T {
    fn encode(&self, key: &mut ArgumentKey) {
        (**self).encode(key);
    }
}

impl<T: CanonicalArguments> CanonicalArguments for Option<T> {
    fn encode(&self, key: &mut ArgumentKey) {
        match self {
            Some(value) => value.encode(key),
            None => key.push(Primitive::Null),
        }
    }
}

impl CanonicalArguments for () {
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Unit);
    }
}

impl CanonicalArguments for bool {
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Bool(*self));
    }
}

impl CanonicalArguments for char {
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Char(*self));
    }
}

impl CanonicalArguments for str {
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Str(self.to_owned()));
    }
}

impl CanonicalArguments for String {
    fn encode(&self, key: &mut ArgumentKey) {
        self.as_str().encode(key);
    }
}

impl CanonicalArguments for f64 {
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Float(self.to_bits()));
    }
}

impl CanonicalArguments for f32 {
    fn encode(&self, key: &mut ArgumentKey) {
        f64::from(*self).encode(key);
    }
}

macro_rules! impl_canonical_integer {
    ($($integer:ty),*) => {
        $(
            impl CanonicalArguments for $integer {
                fn encode(&self, key: &mut ArgumentKey) {
                    key.push(Primitive::Int(i128::from(*self)));
                }
            }
        )*
    };
}

impl_canonical_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl CanonicalArguments for isize {
    #[allow(clippy::cast_lossless)]
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Int(*self as i128));
    }
}

impl CanonicalArguments for usize {
    #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
    fn encode(&self, key: &mut ArgumentKey) {
        key.push(Primitive::Int(*self as i128));
    }
}

macro_rules! impl_canonical_tuple {
    ($($name:ident),+) => {
        impl<$($name: CanonicalArguments),+> CanonicalArguments for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, key: &mut ArgumentKey) {
                let ($($name,)+) = self;
                $($name.encode(key);)+
            }
        }
    };
}

impl_canonical_tuple!(A);
impl_canonical_tuple!(A, B);
impl_canonical_tuple!(A, B, C);
impl_canonical_tuple!(A, B, C, D);
impl_canonical_tuple!(A, B, C, D, E);
impl_canonical_tuple!(A, B, C, D, E, G);
