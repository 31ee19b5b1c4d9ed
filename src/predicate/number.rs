//! Number predicates
//!
//! Predicates behind the numeric guards. Comparisons go through [`compare`],
//! which orders NaN below every other value, so a NaN float counts as
//! negative and as outside every range, and never as zero.

use super::combinators::Predicate;
use num_traits::Zero;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Total comparison for partially ordered numbers.
///
/// Falls back to treating an unordered operand (NaN) as the smallest value.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&1.0, &2.0), Ordering::Less);
/// assert_eq!(compare(&f64::NAN, &-1e300), Ordering::Less);
/// assert_eq!(compare(&0.0, &f64::NAN), Ordering::Greater);
/// assert_eq!(compare(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
pub fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            match (a_unordered, b_unordered) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                _ => Ordering::Greater,
            }
        }
    }
}

/// Predicate that holds when the value equals zero.
pub struct IsZero<T>(PhantomData<fn(&T) -> bool>);

impl<T: Zero> Predicate<T> for IsZero<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_zero()
    }
}

/// Create a predicate that holds when the value equals zero.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(is_zero().check(&0_u8));
/// assert!(is_zero().check(&-0.0_f64));
/// assert!(!is_zero().check(&7));
/// ```
pub fn is_zero<T: Zero>() -> IsZero<T> {
    IsZero(PhantomData)
}

/// Predicate that holds when the value is below zero.
pub struct IsNegative<T>(PhantomData<fn(&T) -> bool>);

impl<T: PartialOrd + Zero> Predicate<T> for IsNegative<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        compare(value, &T::zero()) == Ordering::Less
    }
}

/// Create a predicate that holds when the value is below zero.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(is_negative().check(&-1));
/// assert!(!is_negative().check(&0));
/// assert!(is_negative().check(&f32::NAN));
/// ```
pub fn is_negative<T: PartialOrd + Zero>() -> IsNegative<T> {
    IsNegative(PhantomData)
}

/// Predicate that holds when the value lies outside `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct OutsideRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Predicate<T> for OutsideRange<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        compare(value, &self.min) == Ordering::Less
            || compare(value, &self.max) == Ordering::Greater
    }
}

/// Create a predicate that holds when the value is below `min` or above
/// `max`. Both bounds are inclusive.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// let p = outside_range(0, 100);
/// assert!(!p.check(&0));
/// assert!(!p.check(&100));
/// assert!(p.check(&-1));
/// assert!(p.check(&101));
/// ```
pub fn outside_range<T: PartialOrd>(min: T, max: T) -> OutsideRange<T> {
    OutsideRange { min, max }
}

impl<T> Clone for IsZero<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IsZero<T> {}

impl<T> std::fmt::Debug for IsZero<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IsZero")
    }
}

impl<T> Clone for IsNegative<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IsNegative<T> {}

impl<T> std::fmt::Debug for IsNegative<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IsNegative")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_is_zero() {
        assert!(is_zero().check(&0));
        assert!(!is_zero().check(&1));
        assert!(is_zero().check(&0.0_f32));
        assert!(!is_zero().check(&f64::NAN));
    }

    #[test]
    fn test_is_negative() {
        assert!(is_negative().check(&-1_i8));
        assert!(!is_negative().check(&0_i8));
        assert!(!is_negative().check(&1_i8));
        assert!(is_negative().check(&-0.5_f64));
        assert!(!is_negative().check(&-0.0_f64));
    }

    #[test]
    fn test_outside_range_is_inclusive() {
        let p = outside_range(3_u32, 7_u32);
        assert!(p.check(&2));
        assert!(!p.check(&3));
        assert!(!p.check(&5));
        assert!(!p.check(&7));
        assert!(p.check(&8));
    }

    #[test]
    fn test_outside_range_inverted_bounds_rejects_everything() {
        let p = outside_range(10, 1);
        for v in -5..15 {
            assert!(p.check(&v));
        }
    }

    #[test]
    fn test_nan_is_outside_every_range() {
        let p = outside_range(f64::NEG_INFINITY, f64::INFINITY);
        assert!(p.check(&f64::NAN));
        assert!(!p.check(&1e300));
    }

    #[test]
    fn test_compare_orders_nan_first() {
        assert_eq!(compare(&f32::NAN, &f32::NEG_INFINITY), Ordering::Less);
        assert_eq!(compare(&f32::NEG_INFINITY, &f32::NAN), Ordering::Greater);
        assert_eq!(compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_combined_number_predicates() {
        let p = is_zero().or(is_negative());
        assert!(p.check(&0));
        assert!(p.check(&-3));
        assert!(!p.check(&3));
    }
}
