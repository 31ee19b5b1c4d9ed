//! Collection guards
//!
//! Guards for absent or empty sequences and for unwanted elements. Sequences
//! are `Vec<T>` or `Option<Vec<T>>` (see [`Sequence`]); iterators are collected
//! first, e.g. into a [`Guarded<Vec<T>>`](crate::Guarded).
//!
//! Element guards filter rather than replace: the result keeps the remaining
//! items in their original order. An absent sequence is never filtered.
//!
//! # Example
//!
//! ```rust
//! use backstop::{collection, Guarded};
//!
//! let mut ids: Guarded<Vec<u32>> = [1, 5, 12].into_iter().collect();
//! collection::against_values_not_in_set(&mut ids, &(1..=9));
//! assert_eq!(ids.into_inner(), vec![1, 5]);
//! ```

use crate::against::against;
use crate::predicate::{
    has_default_elements, has_none_elements, has_values_outside, is_empty_sequence, is_none,
    is_none_or_empty_sequence,
};
use crate::recovery::Recovery;
use crate::slot::{Guarded, Slot};

pub use crate::predicate::{DesiredSet, Sequence};

/// Ties a slot type to the sequence type it holds.
///
/// Implemented for `Vec<T>` and `Option<Vec<T>>` as direct bindings and for
/// their [`Guarded`] cells.
pub trait SequenceSlot {
    /// The sequence type held by the slot.
    type Sequence: Sequence;
}

impl<T: Clone> SequenceSlot for Vec<T> {
    type Sequence = Vec<T>;
}

impl<T: Clone> SequenceSlot for Option<Vec<T>> {
    type Sequence = Option<Vec<T>>;
}

impl<T: Clone> SequenceSlot for Guarded<Vec<T>> {
    type Sequence = Vec<T>;
}

impl<T: Clone> SequenceSlot for Guarded<Option<Vec<T>>> {
    type Sequence = Option<Vec<T>>;
}

/// Replace an absent sequence with `Some(default)`.
pub fn against_none<T, S>(slot: &mut S, default: Vec<T>)
where
    S: Slot<Option<Vec<T>>> + ?Sized,
{
    against(slot, is_none(), Recovery::Value(Some(default)));
}

/// Replace a present, empty sequence with `default`.
///
/// An absent sequence is left alone; see [`against_none_or_empty`].
pub fn against_empty<C, S>(slot: &mut S, default: Vec<C::Item>)
where
    C: Sequence,
    S: SequenceSlot<Sequence = C> + Slot<C> + ?Sized,
{
    against(slot, is_empty_sequence(), Recovery::Value(C::from_items(default)));
}

/// Replace an absent or empty sequence with `default`.
///
/// # Example
///
/// ```rust
/// use backstop::collection;
///
/// let mut tags: Option<Vec<&str>> = Some(vec![]);
/// collection::against_none_or_empty(&mut tags, vec!["untagged"]);
/// assert_eq!(tags, Some(vec!["untagged"]));
/// ```
pub fn against_none_or_empty<C, S>(slot: &mut S, default: Vec<C::Item>)
where
    C: Sequence,
    S: SequenceSlot<Sequence = C> + Slot<C> + ?Sized,
{
    against(
        slot,
        is_none_or_empty_sequence(),
        Recovery::Value(C::from_items(default)),
    );
}

/// Drop `None` items.
///
/// # Example
///
/// ```rust
/// use backstop::collection;
///
/// let mut readings = vec![Some(3), None, Some(4), None];
/// collection::against_none_elements(&mut readings);
/// assert_eq!(readings, vec![Some(3), Some(4)]);
/// ```
pub fn against_none_elements<C, U, S>(slot: &mut S)
where
    C: Sequence<Item = Option<U>>,
    U: Clone,
    S: SequenceSlot<Sequence = C> + Slot<C> + ?Sized,
{
    against(
        slot,
        has_none_elements(),
        Recovery::with_current(|current: &C| retained(current, Option::is_some)),
    );
}

/// Drop items equal to the item type's default value.
pub fn against_default_elements<C, S>(slot: &mut S)
where
    C: Sequence,
    C::Item: Default + PartialEq + Clone,
    S: SequenceSlot<Sequence = C> + Slot<C> + ?Sized,
{
    against(
        slot,
        has_default_elements(),
        Recovery::with_current(|current: &C| {
            let default = C::Item::default();
            retained(current, |item| *item != default)
        }),
    );
}

/// Keep only the items that belong to `desired`.
///
/// `desired` is only read, and may be queried once per item.
pub fn against_values_not_in_set<C, D, S>(slot: &mut S, desired: &D)
where
    C: Sequence,
    C::Item: Clone,
    D: DesiredSet<C::Item> + ?Sized,
    S: SequenceSlot<Sequence = C> + Slot<C> + ?Sized,
{
    against(
        slot,
        has_values_outside(desired),
        Recovery::with_current(move |current: &C| retained(current, |item| desired.has(item))),
    );
}

fn retained<C>(current: &C, keep: impl Fn(&C::Item) -> bool) -> C
where
    C: Sequence,
    C::Item: Clone,
{
    match current.items() {
        Some(items) => C::from_items(items.iter().filter(|item| keep(item)).cloned().collect()),
        None => current.clone(),
    }
}
