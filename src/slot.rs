//! Mutation targets for guards
//!
//! Every guard in this crate writes its replacement through a [`Slot`]. Two
//! kinds of slot exist:
//!
//! - a **direct binding**: any `T` is its own slot, so `&mut value` can be
//!   handed straight to a guard;
//! - a **cell**: [`Guarded<T>`] boxes a value so it can be passed around,
//!   stored in a struct, or initialized through further indirection before
//!   being unwrapped.
//!
//! Both forms go through the same [`Slot`] capability, so every guard is
//! written once and behaves identically for either.
//!
//! # Example
//!
//! ```rust
//! use backstop::{numeric, Guarded};
//!
//! // Direct binding
//! let mut retries = -3;
//! numeric::against_negative(&mut retries, 0);
//! assert_eq!(retries, 0);
//!
//! // Cell
//! let mut retries = Guarded::new(-3);
//! numeric::against_negative(&mut retries, 0);
//! assert_eq!(retries.into_inner(), 0);
//! ```

use std::fmt;

/// A gettable / settable location holding a `T`.
///
/// Implemented for every `T` (the value is its own slot) and for
/// [`Guarded<T>`]. Guards only ever read the current content, and, when the
/// predicate holds, overwrite it with a fully computed replacement.
pub trait Slot<T> {
    /// Borrow the current content.
    fn current(&self) -> &T;

    /// Overwrite the content.
    fn store(&mut self, value: T);
}

impl<T> Slot<T> for T {
    #[inline]
    fn current(&self) -> &T {
        self
    }

    #[inline]
    fn store(&mut self, value: T) {
        *self = value;
    }
}

/// A single-slot cell around a value.
///
/// `Guarded<T>` always holds exactly one well-defined `T` (which may itself be
/// `None`, an empty string, etc.). [`set`](Guarded::set) is its only mutator.
/// It provides no internal synchronization: exclusive access is what
/// `&mut Guarded<T>` already guarantees.
///
/// # Example
///
/// ```rust
/// use backstop::{against, Guarded, Recovery};
///
/// let mut cell = Guarded::new(1);
/// against(&mut cell, |x: &i32| x % 2 != 0, Recovery::with_current(|x: &i32| x + 1));
/// assert_eq!(*cell.get(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guarded<T> {
    value: T,
}

impl<T> Guarded<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Overwrite the current value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Unwrap the cell, returning the current value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Slot<T> for Guarded<T> {
    #[inline]
    fn current(&self) -> &T {
        &self.value
    }

    #[inline]
    fn store(&mut self, value: T) {
        self.value = value;
    }
}

impl<T> From<T> for Guarded<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<T> for Guarded<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Collecting an iterator into a cell materializes it, so sequence guards can
/// walk it as many times as they need.
///
/// ```rust
/// use backstop::{collection, Guarded};
///
/// let mut evens: Guarded<Vec<u32>> = (0..6).filter(|n| n % 2 == 0).collect();
/// collection::against_default_elements(&mut evens);
/// assert_eq!(evens.into_inner(), vec![2, 4]);
/// ```
impl<T> FromIterator<T> for Guarded<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Guarded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guarded").field(&self.value).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Guarded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Shape: fmt::Debug {
        fn sides(&self) -> u32;
    }

    #[derive(Debug)]
    struct Triangle;

    #[derive(Debug)]
    struct Square;

    impl Shape for Triangle {
        fn sides(&self) -> u32 {
            3
        }
    }

    impl Shape for Square {
        fn sides(&self) -> u32 {
            4
        }
    }

    fn overwrite<T, S: Slot<T> + ?Sized>(slot: &mut S, value: T) {
        <S as Slot<T>>::store(slot, value);
    }

    #[test]
    fn test_new_and_get() {
        let cell = Guarded::new(1);
        assert_eq!(*cell.get(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut cell = Guarded::new(String::from("a"));
        cell.set(String::from("b"));
        assert_eq!(cell.get(), "b");
    }

    #[test]
    fn test_from_and_default() {
        let cell: Guarded<i64> = 7.into();
        assert_eq!(cell.into_inner(), 7);
        assert_eq!(Guarded::<Option<u8>>::default().into_inner(), None);
    }

    #[test]
    fn test_direct_binding_is_a_slot() {
        let mut value = 10_u16;
        overwrite(&mut value, 20);
        assert_eq!(value, 20);
    }

    #[test]
    fn test_cell_is_a_slot() {
        let mut cell = Guarded::new(10_u16);
        overwrite(&mut cell, 20);
        assert_eq!(cell.into_inner(), 20);
    }

    #[test]
    fn test_trait_object_keeps_concrete_value() {
        let mut cell: Guarded<Box<dyn Shape>> = Guarded::new(Box::new(Triangle));
        assert_eq!(cell.get().sides(), 3);

        cell.set(Box::new(Square));
        assert_eq!(cell.get().sides(), 4);
    }

    #[test]
    fn test_collect_materializes() {
        let cell: Guarded<Vec<u8>> = (1..=3).collect();
        assert_eq!(cell.get(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_debug_and_display() {
        let cell = Guarded::new(5);
        assert_eq!(format!("{:?}", cell), "Guarded(5)");
        assert_eq!(cell.to_string(), "5");
    }
}
