//! Object guards
//!
//! `None` substitution for any optional value, including trait objects.

use crate::against::against;
use crate::predicate::is_none;
use crate::recovery::Recovery;
use crate::slot::Slot;

/// Replace `None` with `Some(default)`.
///
/// # Example
///
/// ```rust
/// use backstop::{object, Guarded};
///
/// trait Shape {
///     fn sides(&self) -> u32;
/// }
///
/// struct Triangle;
///
/// impl Shape for Triangle {
///     fn sides(&self) -> u32 {
///         3
///     }
/// }
///
/// let mut shape: Guarded<Option<Box<dyn Shape>>> = Guarded::new(None);
/// object::against_none(&mut shape, Box::new(Triangle) as Box<dyn Shape>);
/// assert_eq!(shape.get().as_ref().map(|s| s.sides()), Some(3));
/// ```
pub fn against_none<T, S>(slot: &mut S, default: T)
where
    S: Slot<Option<T>> + ?Sized,
{
    against(slot, is_none(), Recovery::Value(Some(default)));
}
