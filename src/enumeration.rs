//! Enumeration guards
//!
//! Guards that replace values falling outside a type's declared constants.
//! A type opts in by implementing [`Enumeration`].
//!
//! # Example
//!
//! ```rust
//! use backstop::enumeration::{self, Enumeration};
//!
//! // Wire-level status code that keeps unknown values around.
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Status(u16);
//!
//! impl Status {
//!     const OK: Self = Self(200);
//!     const NOT_FOUND: Self = Self(404);
//! }
//!
//! impl Enumeration for Status {
//!     const VARIANTS: &'static [Self] = &[Self::OK, Self::NOT_FOUND];
//! }
//!
//! let mut status = Status(299);
//! enumeration::against_not_in_range(&mut status, Status::OK);
//! assert_eq!(status, Status::OK);
//! ```

use crate::against::against;
use crate::predicate::{is_undefined, none_or};
use crate::recovery::Recovery;
use crate::slot::Slot;

pub use crate::predicate::Enumeration;

/// Replace the value with `default` when it is not one of `E::VARIANTS`.
pub fn against_not_in_range<E, S>(slot: &mut S, default: E)
where
    E: Enumeration,
    S: Slot<E> + ?Sized,
{
    against(slot, is_undefined(), Recovery::Value(default));
}

/// Replace `None` or an undeclared `Some` with `Some(default)`.
///
/// # Example
///
/// ```rust
/// use backstop::enumeration::{self, Enumeration};
/// use backstop::Guarded;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl Enumeration for Level {
///     const VARIANTS: &'static [Self] = &[Level::Low, Level::High];
/// }
///
/// let mut level = Guarded::new(None);
/// enumeration::against_none_or_not_in_range(&mut level, Level::Low);
/// assert_eq!(level.into_inner(), Some(Level::Low));
/// ```
pub fn against_none_or_not_in_range<E, S>(slot: &mut S, default: E)
where
    E: Enumeration,
    S: Slot<Option<E>> + ?Sized,
{
    against(slot, none_or(is_undefined()), Recovery::Value(Some(default)));
}
