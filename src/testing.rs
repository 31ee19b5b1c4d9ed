//! Testing utilities for code that uses guards
//!
//! Assertion macros for the two properties every guard is expected to have,
//! and property-based testing support for [`Guarded`](crate::Guarded).
//!
//! # Examples
//!
//! ## Direct binding and cell agree
//!
//! ```rust
//! use backstop::{assert_forms_agree, numeric};
//!
//! let result = assert_forms_agree!(-3_i32, |slot| numeric::against_negative(slot, 0));
//! assert_eq!(result, 0);
//! ```
//!
//! ## Applying a guard twice changes nothing more
//!
//! ```rust
//! use backstop::{assert_idempotent, string};
//!
//! let result = assert_idempotent!(String::from("  x "), |slot| {
//!     string::against_leading_or_trailing_whitespace(slot)
//! });
//! assert_eq!(result, "x");
//! ```

/// Run a guard once on a direct binding and once on a [`Guarded`] cell that
/// start from the same value, and assert both end with the same value.
///
/// `slot` is bound to `&mut T` in the first run and to `&mut Guarded<T>` in
/// the second. The macro evaluates to the final value.
///
/// [`Guarded`]: crate::Guarded
///
/// # Example
///
/// ```rust
/// use backstop::{assert_forms_agree, collection};
///
/// let kept = assert_forms_agree!(vec![1, 5, 12], |slot| {
///     collection::against_values_not_in_set(slot, &(1..=9))
/// });
/// assert_eq!(kept, vec![1, 5]);
/// ```
#[macro_export]
macro_rules! assert_forms_agree {
    ($initial:expr, |$slot:ident| $guard:expr) => {{
        let initial = $initial;
        let mut direct = ::core::clone::Clone::clone(&initial);
        {
            let $slot = &mut direct;
            $guard;
        }
        let mut cell = $crate::Guarded::new(initial);
        {
            let $slot = &mut cell;
            $guard;
        }
        let cell = cell.into_inner();
        assert_eq!(
            direct, cell,
            "direct binding and cell disagree: {:?} vs {:?}",
            direct, cell
        );
        direct
    }};
}

/// Apply a guard twice and assert the second application left the value
/// unchanged.
///
/// The macro evaluates to the final value.
///
/// # Example
///
/// ```rust
/// use backstop::{assert_idempotent, numeric};
///
/// let value = assert_idempotent!(250_u8, |slot| numeric::clamp_to_range(slot, 0, 100));
/// assert_eq!(value, 100);
/// ```
#[macro_export]
macro_rules! assert_idempotent {
    ($initial:expr, |$slot:ident| $guard:expr) => {{
        let mut value = $initial;
        {
            let $slot = &mut value;
            $guard;
        }
        let once = ::core::clone::Clone::clone(&value);
        {
            let $slot = &mut value;
            $guard;
        }
        assert_eq!(
            once, value,
            "second application changed the value: {:?} -> {:?}",
            once, value
        );
        value
    }};
}

#[cfg(feature = "proptest")]
use crate::slot::Guarded;

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Guarded<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<T>(args).prop_map(Guarded::new).boxed()
    }
}
