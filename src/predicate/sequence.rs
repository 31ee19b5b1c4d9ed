//! Sequence predicates
//!
//! This module provides the [`Sequence`] and [`DesiredSet`] capabilities and
//! the predicates the collection guards are built from.

use super::combinators::Predicate;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::ops::{Range, RangeInclusive};

/// A possibly absent, materialized sequence of items.
///
/// Items are held in memory so a guard can walk them once for its predicate
/// and again for its filter.
pub trait Sequence: Clone {
    /// Element type.
    type Item;

    /// Borrow the items, or `None` when the sequence itself is absent.
    fn items(&self) -> Option<&[Self::Item]>;

    /// Build a present sequence from owned items.
    fn from_items(items: Vec<Self::Item>) -> Self;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }

    #[inline]
    fn from_items(items: Vec<T>) -> Self {
        items
    }
}

impl<T: Clone> Sequence for Option<Vec<T>> {
    type Item = T;

    #[inline]
    fn items(&self) -> Option<&[T]> {
        self.as_deref()
    }

    #[inline]
    fn from_items(items: Vec<T>) -> Self {
        Some(items)
    }
}

/// A read-only membership test used by "values not in set" guards.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::DesiredSet;
///
/// assert!((1..=9).has(&9));
/// assert!(!(1..9).has(&9));
/// assert!([2, 4, 6][..].has(&4));
/// ```
pub trait DesiredSet<T> {
    /// Whether `item` belongs to the set.
    fn has(&self, item: &T) -> bool;
}

impl<T: PartialEq> DesiredSet<T> for [T] {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> DesiredSet<T> for [T; N] {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> DesiredSet<T> for Vec<T> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> DesiredSet<T> for HashSet<T, S> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> DesiredSet<T> for BTreeSet<T> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialOrd> DesiredSet<T> for Range<T> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialOrd> DesiredSet<T> for RangeInclusive<T> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

/// Predicate that holds for a present sequence with no items.
pub struct IsEmptySequence<C>(PhantomData<fn(&C) -> bool>);

impl<C: Sequence> Predicate<C> for IsEmptySequence<C> {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.items().is_some_and(<[C::Item]>::is_empty)
    }
}

/// Create a predicate that holds for a present, empty sequence.
///
/// An absent sequence does not match; use [`is_none_or_empty_sequence`] for
/// that.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(is_empty_sequence().check(&Vec::<u8>::new()));
/// assert!(!is_empty_sequence().check(&None::<Vec<u8>>));
/// assert!(!is_empty_sequence().check(&vec![1]));
/// ```
pub fn is_empty_sequence<C: Sequence>() -> IsEmptySequence<C> {
    IsEmptySequence(PhantomData)
}

/// Predicate that holds for an absent or empty sequence.
pub struct IsNoneOrEmptySequence<C>(PhantomData<fn(&C) -> bool>);

impl<C: Sequence> Predicate<C> for IsNoneOrEmptySequence<C> {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.items().map_or(true, <[C::Item]>::is_empty)
    }
}

/// Create a predicate that holds for an absent or empty sequence.
pub fn is_none_or_empty_sequence<C: Sequence>() -> IsNoneOrEmptySequence<C> {
    IsNoneOrEmptySequence(PhantomData)
}

/// Predicate that holds when at least one item is `None`.
pub struct HasNoneElements<C>(PhantomData<fn(&C) -> bool>);

impl<C, U> Predicate<C> for HasNoneElements<C>
where
    C: Sequence<Item = Option<U>>,
{
    #[inline]
    fn check(&self, value: &C) -> bool {
        value
            .items()
            .is_some_and(|items| items.iter().any(Option::is_none))
    }
}

/// Create a predicate that holds when at least one item is `None`.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(has_none_elements().check(&vec![Some(1), None]));
/// assert!(!has_none_elements().check(&vec![Some(1), Some(2)]));
/// ```
pub fn has_none_elements<C, U>() -> HasNoneElements<C>
where
    C: Sequence<Item = Option<U>>,
{
    HasNoneElements(PhantomData)
}

/// Predicate that holds when at least one item equals `Item::default()`.
pub struct HasDefaultElements<C>(PhantomData<fn(&C) -> bool>);

impl<C> Predicate<C> for HasDefaultElements<C>
where
    C: Sequence,
    C::Item: Default + PartialEq,
{
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.items().is_some_and(|items| {
            let default = C::Item::default();
            items.iter().any(|item| *item == default)
        })
    }
}

/// Create a predicate that holds when at least one item equals the item
/// type's default value.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(has_default_elements().check(&vec![String::from("a"), String::new()]));
/// assert!(!has_default_elements().check(&vec![1, 2, 3]));
/// ```
pub fn has_default_elements<C>() -> HasDefaultElements<C>
where
    C: Sequence,
    C::Item: Default + PartialEq,
{
    HasDefaultElements(PhantomData)
}

/// Predicate that holds when at least one item is missing from a desired
/// set.
pub struct HasValuesOutside<'a, C, D: ?Sized> {
    desired: &'a D,
    _sequence: PhantomData<fn(&C) -> bool>,
}

impl<C, D> Predicate<C> for HasValuesOutside<'_, C, D>
where
    C: Sequence,
    D: DesiredSet<C::Item> + ?Sized,
{
    #[inline]
    fn check(&self, value: &C) -> bool {
        value
            .items()
            .is_some_and(|items| items.iter().any(|item| !self.desired.has(item)))
    }
}

/// Create a predicate that holds when at least one item is not a member of
/// `desired`.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// let allowed = 1..=9;
/// assert!(has_values_outside(&allowed).check(&vec![1, 5, 12]));
/// assert!(!has_values_outside(&allowed).check(&vec![1, 5]));
/// ```
pub fn has_values_outside<C, D>(desired: &D) -> HasValuesOutside<'_, C, D>
where
    C: Sequence,
    D: DesiredSet<C::Item> + ?Sized,
{
    HasValuesOutside {
        desired,
        _sequence: PhantomData,
    }
}

impl<C, D: ?Sized> Clone for HasValuesOutside<'_, C, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, D: ?Sized> Copy for HasValuesOutside<'_, C, D> {}

impl<C, D: ?Sized> std::fmt::Debug for HasValuesOutside<'_, C, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HasValuesOutside").finish_non_exhaustive()
    }
}

macro_rules! impl_marker_traits {
    ($($name:ident),+) => {
        $(
            impl<C> Clone for $name<C> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<C> Copy for $name<C> {}

            impl<C> std::fmt::Debug for $name<C> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )+
    };
}

impl_marker_traits!(
    IsEmptySequence,
    IsNoneOrEmptySequence,
    HasNoneElements,
    HasDefaultElements
);
