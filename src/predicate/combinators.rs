//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the logical
//! combinators for composing predicates, and the `Option` lifting used by
//! every "none or ..." guard.

/// A predicate over values of type T, describing an *invalid* condition.
///
/// Guards replace the value when the predicate returns `true`.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// let suspicious = is_zero().or(is_negative());
/// assert!(suspicious.check(&0));
/// assert!(suspicious.check(&-5));
/// assert!(!suspicious.check(&25));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so composed predicates stay
/// monomorphized.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backstop::predicate::*;
    ///
    /// let p = is_negative().and(|x: &i32| x % 2 == 0);
    /// assert!(p.check(&-4));
    /// assert!(!p.check(&-3));
    /// assert!(!p.check(&4));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backstop::predicate::*;
    ///
    /// let p = is_zero().or(outside_range(1, 10));
    /// assert!(p.check(&0));
    /// assert!(p.check(&11));
    /// assert!(!p.check(&5));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backstop::predicate::*;
    ///
    /// let p = is_zero().not();
    /// assert!(p.check(&5));
    /// assert!(!p.check(&0));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Predicate that holds for `None`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNone;

impl<T> Predicate<Option<T>> for IsNone {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

/// Create a predicate that holds for `None`.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// assert!(is_none().check(&None::<u8>));
/// assert!(!is_none().check(&Some(1)));
/// ```
pub fn is_none() -> IsNone {
    IsNone
}

/// Lifts a predicate over `T` to `Option<T>`: holds for `None`, otherwise
/// delegates to the inner predicate.
///
/// The inner predicate is never evaluated for `None`.
#[derive(Clone, Copy, Debug)]
pub struct NoneOr<P>(pub P);

impl<T, P: Predicate<T>> Predicate<Option<T>> for NoneOr<P> {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        match value {
            None => true,
            Some(inner) => self.0.check(inner),
        }
    }
}

/// Create a predicate that holds for `None` or for `Some(v)` where `inner`
/// holds for `v`.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::*;
///
/// let p = none_or(is_zero());
/// assert!(p.check(&None::<i32>));
/// assert!(p.check(&Some(0)));
/// assert!(!p.check(&Some(3)));
/// ```
pub fn none_or<P>(inner: P) -> NoneOr<P> {
    NoneOr(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_is_predicate() {
        let odd = |x: &i32| x % 2 != 0;
        assert!(odd.check(&3));
        assert!(!odd.check(&4));
    }

    #[test]
    fn test_and_or_not() {
        let gt_0 = |x: &i32| *x > 0;
        let lt_10 = |x: &i32| *x < 10;

        let between = gt_0.and(lt_10);
        assert!(between.check(&5));
        assert!(!between.check(&10));

        let outside = between.not();
        assert!(outside.check(&-1));
        assert!(!outside.check(&5));

        let either = gt_0.or(|x: &i32| *x == -1);
        assert!(either.check(&-1));
        assert!(!either.check(&-2));
    }

    #[test]
    fn test_closure_over_rc_composes() {
        let blocked = Rc::new(vec![13, 666]);
        let deny = {
            let blocked = Rc::clone(&blocked);
            move |x: &i32| blocked.contains(x)
        };

        let rejected = deny.or(|x: &i32| *x < 0);
        assert!(rejected.check(&13));
        assert!(rejected.check(&-1));
        assert!(!rejected.check(&7));
        assert_eq!(Rc::strong_count(&blocked), 2);
    }

    #[test]
    fn test_is_none() {
        assert!(is_none().check(&None::<String>));
        assert!(!is_none().check(&Some(String::new())));
    }

    #[test]
    fn test_none_or_skips_inner_for_none() {
        let calls = AtomicUsize::new(0);
        let counted = |x: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            *x == 0
        };

        let p = none_or(counted);
        assert!(p.check(&None));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(p.check(&Some(0)));
        assert!(!p.check(&Some(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
