//! Enumeration domain predicates

use super::combinators::Predicate;
use std::marker::PhantomData;

/// A type whose valid values are a fixed list of named constants.
///
/// Closed Rust enums can only ever hold a declared variant, so this is mostly
/// useful for *open* enumerations: a newtype over an integer with associated
/// constants, as produced by wire decoders that must keep unknown values.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::Enumeration;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Priority(u8);
///
/// impl Priority {
///     const LOW: Self = Self(0);
///     const HIGH: Self = Self(1);
/// }
///
/// impl Enumeration for Priority {
///     const VARIANTS: &'static [Self] = &[Self::LOW, Self::HIGH];
/// }
///
/// assert!(Priority::HIGH.is_defined());
/// assert!(!Priority(9).is_defined());
/// ```
pub trait Enumeration: Copy + PartialEq + Send + Sync + 'static {
    /// Every declared constant.
    const VARIANTS: &'static [Self];

    /// Whether `self` is one of [`VARIANTS`](Enumeration::VARIANTS).
    fn is_defined(&self) -> bool {
        Self::VARIANTS.contains(self)
    }
}

/// Predicate that holds for values outside the declared constants.
pub struct IsUndefined<E>(PhantomData<fn(&E) -> bool>);

impl<E: Enumeration> Predicate<E> for IsUndefined<E> {
    #[inline]
    fn check(&self, value: &E) -> bool {
        !value.is_defined()
    }
}

impl<E> Clone for IsUndefined<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for IsUndefined<E> {}

impl<E> std::fmt::Debug for IsUndefined<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IsUndefined")
    }
}

/// Create a predicate that holds for values outside the declared constants.
pub fn is_undefined<E: Enumeration>() -> IsUndefined<E> {
    IsUndefined(PhantomData)
}
