//! Numeric guards
//!
//! Guards for zero, negative, and out-of-range numbers, plus their `Option`
//! counterparts, where `None` is always replaced.
//!
//! Two capability traits scope what is available per type:
//!
//! - [`Numeric`]: every primitive number (and `rust_decimal::Decimal` with the
//!   `decimal` feature). Zero and range checks.
//! - [`SignedNumeric`]: the numbers that can be negative. Adds the negative
//!   checks, so unsigned types never expose them.
//!
//! Each guard is available both as a generic function in this module and as
//! an associated function on the primitive itself:
//!
//! ```rust
//! use backstop::numeric::{self, Numeric, SignedNumeric};
//!
//! let mut offset = -4_i64;
//! numeric::against_negative(&mut offset, 0);
//! assert_eq!(offset, 0);
//!
//! let mut offset = -4_i64;
//! i64::against_negative(&mut offset, 0);
//! assert_eq!(offset, 0);
//!
//! let mut workers = 0_u8;
//! u8::against_zero(&mut workers, 4);
//! assert_eq!(workers, 4);
//! ```
//!
//! Comparisons treat NaN as smaller than every number, so a NaN float is
//! negative and out of every range (see [`compare`](crate::predicate::compare)).

use crate::against::against;
use crate::predicate::{compare, is_negative, is_zero, none_or, outside_range};
use crate::recovery::Recovery;
use crate::slot::Slot;
use num_traits::Zero;
use std::cmp::Ordering;

/// A number that can be compared and has a zero.
///
/// The provided associated functions are the per-type entry points for the
/// guards in this module; they simply forward to the generic functions.
pub trait Numeric: Copy + PartialOrd + Zero + Send + Sync + 'static {
    /// See [`against_zero`].
    fn against_zero<S: Slot<Self> + ?Sized>(slot: &mut S, default: Self) {
        against_zero(slot, default);
    }

    /// See [`against_not_in_range`].
    fn against_not_in_range<S: Slot<Self> + ?Sized>(
        slot: &mut S,
        min: Self,
        max: Self,
        default: Self,
    ) {
        against_not_in_range(slot, min, max, default);
    }

    /// See [`clamp_to_range`].
    fn clamp_to_range<S: Slot<Self> + ?Sized>(slot: &mut S, min: Self, max: Self) {
        clamp_to_range(slot, min, max);
    }

    /// See [`against_none_or_zero`].
    fn against_none_or_zero<S: Slot<Option<Self>> + ?Sized>(slot: &mut S, default: Self) {
        against_none_or_zero(slot, default);
    }

    /// See [`against_none_or_not_in_range`].
    fn against_none_or_not_in_range<S: Slot<Option<Self>> + ?Sized>(
        slot: &mut S,
        min: Self,
        max: Self,
        default: Self,
    ) {
        against_none_or_not_in_range(slot, min, max, default);
    }
}

/// A [`Numeric`] type able to represent negative values.
pub trait SignedNumeric: Numeric {
    /// See [`against_negative`].
    fn against_negative<S: Slot<Self> + ?Sized>(slot: &mut S, default: Self) {
        against_negative(slot, default);
    }

    /// See [`against_none_or_negative`].
    fn against_none_or_negative<S: Slot<Option<Self>> + ?Sized>(slot: &mut S, default: Self) {
        against_none_or_negative(slot, default);
    }
}

macro_rules! impl_numeric {
    (signed: [$($signed:ty),+], unsigned: [$($unsigned:ty),+]) => {
        $(
            impl Numeric for $signed {}
            impl SignedNumeric for $signed {}
        )+
        $(
            impl Numeric for $unsigned {}
        )+
    };
}

impl_numeric!(
    signed: [i8, i16, i32, i64, i128, isize, f32, f64],
    unsigned: [u8, u16, u32, u64, u128, usize]
);

#[cfg(feature = "decimal")]
impl Numeric for rust_decimal::Decimal {}

#[cfg(feature = "decimal")]
impl SignedNumeric for rust_decimal::Decimal {}

/// Replace the value with `default` when it equals zero.
///
/// # Example
///
/// ```rust
/// use backstop::{numeric, Guarded};
///
/// let mut divisor = Guarded::new(0.0_f64);
/// numeric::against_zero(&mut divisor, 1.0);
/// assert_eq!(divisor.into_inner(), 1.0);
/// ```
pub fn against_zero<T, S>(slot: &mut S, default: T)
where
    T: Numeric,
    S: Slot<T> + ?Sized,
{
    against(slot, is_zero(), Recovery::Value(default));
}

/// Replace the value with `default` when it is below zero.
pub fn against_negative<T, S>(slot: &mut S, default: T)
where
    T: SignedNumeric,
    S: Slot<T> + ?Sized,
{
    against(slot, is_negative(), Recovery::Value(default));
}

/// Replace the value with `default` when it lies outside `[min, max]`.
///
/// Both bounds are inclusive. When `min > max` no value is in range.
///
/// # Example
///
/// ```rust
/// use backstop::numeric;
///
/// let mut percent = 140_u8;
/// numeric::against_not_in_range(&mut percent, 0, 100, 100);
/// assert_eq!(percent, 100);
///
/// let mut percent = 40_u8;
/// numeric::against_not_in_range(&mut percent, 0, 100, 100);
/// assert_eq!(percent, 40);
/// ```
pub fn against_not_in_range<T, S>(slot: &mut S, min: T, max: T, default: T)
where
    T: Numeric,
    S: Slot<T> + ?Sized,
{
    against(slot, outside_range(min, max), Recovery::Value(default));
}

/// Move a value lying outside `[min, max]` to the nearest bound.
///
/// NaN is clamped to `min`.
///
/// # Example
///
/// ```rust
/// use backstop::numeric;
///
/// let mut volume = 1.7_f32;
/// numeric::clamp_to_range(&mut volume, 0.0, 1.0);
/// assert_eq!(volume, 1.0);
///
/// let mut volume = -3.0_f32;
/// numeric::clamp_to_range(&mut volume, 0.0, 1.0);
/// assert_eq!(volume, 0.0);
/// ```
pub fn clamp_to_range<T, S>(slot: &mut S, min: T, max: T)
where
    T: Numeric,
    S: Slot<T> + ?Sized,
{
    against(
        slot,
        outside_range(min, max),
        Recovery::with_current(move |value: &T| {
            if compare(value, &min) == Ordering::Less {
                min
            } else {
                max
            }
        }),
    );
}

/// Replace `None` or `Some(0)` with `Some(default)`.
///
/// # Example
///
/// ```rust
/// use backstop::numeric;
///
/// let mut limit: Option<u32> = None;
/// numeric::against_none_or_zero(&mut limit, 50);
/// assert_eq!(limit, Some(50));
/// ```
pub fn against_none_or_zero<T, S>(slot: &mut S, default: T)
where
    T: Numeric,
    S: Slot<Option<T>> + ?Sized,
{
    against(slot, none_or(is_zero()), Recovery::Value(Some(default)));
}

/// Replace `None` or a negative `Some` with `Some(default)`.
pub fn against_none_or_negative<T, S>(slot: &mut S, default: T)
where
    T: SignedNumeric,
    S: Slot<Option<T>> + ?Sized,
{
    against(slot, none_or(is_negative()), Recovery::Value(Some(default)));
}

/// Replace `None` or a `Some` outside `[min, max]` with `Some(default)`.
pub fn against_none_or_not_in_range<T, S>(slot: &mut S, min: T, max: T, default: T)
where
    T: Numeric,
    S: Slot<Option<T>> + ?Sized,
{
    against(
        slot,
        none_or(outside_range(min, max)),
        Recovery::Value(Some(default)),
    );
}
