//! Conditional replacement engine
//!
//! Every guard in this crate ends up here. The engine reads the slot's current
//! value, evaluates the predicate exactly once, and only if it holds, produces
//! a replacement from the recovery and stores it.
//!
//! The replacement is fully computed before it is stored, so a producer that
//! panics or fails leaves the slot holding its old value.
//!
//! # Example
//!
//! ```rust
//! use backstop::{against, Guarded, Recovery};
//!
//! // Direct binding
//! let mut value = 1;
//! against(&mut value, |x: &i32| x % 2 != 0, Recovery::Value(2));
//! assert_eq!(value, 2);
//!
//! // Cell
//! let mut cell = Guarded::new(1);
//! against(&mut cell, |x: &i32| x % 2 != 0, Recovery::Value(2));
//! assert_eq!(cell.into_inner(), 2);
//! ```

use crate::predicate::{AsyncPredicate, Predicate};
use crate::recovery::{AsyncRecovery, Recovery};
use crate::slot::Slot;
use std::future::Future;

/// Replace the slot's value when `predicate` holds for it.
///
/// Only synchronous recoveries are accepted. Awaited producers go through
/// [`async_against`], so a guard never blocks on a future:
///
/// ```rust,compile_fail
/// use backstop::{against, AsyncRecovery};
///
/// let mut value = 0;
/// against(&mut value, |x: &i32| *x == 0, AsyncRecovery::lazy_async(|| async { 7 }));
/// ```
///
/// # Example
///
/// ```rust
/// use backstop::{against, Recovery};
///
/// let mut attempts = 12_u32;
/// against(&mut attempts, |n: &u32| *n > 10, Recovery::with_current(|_: &u32| 10));
/// assert_eq!(attempts, 10);
///
/// // Already valid: untouched
/// against(&mut attempts, |n: &u32| *n > 10, Recovery::Value(0));
/// assert_eq!(attempts, 10);
/// ```
pub fn against<T, S, P>(slot: &mut S, predicate: P, recovery: Recovery<'_, T>)
where
    S: Slot<T> + ?Sized,
    P: Predicate<T>,
{
    if !predicate.check(<S as Slot<T>>::current(slot)) {
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(recovery = recovery.kind(), "guard predicate held, replacing value");

    let replacement = recovery.resolve(<S as Slot<T>>::current(slot));
    <S as Slot<T>>::store(slot, replacement);
}

/// Replace the slot's value when an asynchronous predicate holds for it.
///
/// The predicate is awaited first; the recovery is started only after it
/// resolved to `true`. Synchronous predicates are lifted with
/// [`predicate::ready`](crate::predicate::ready).
///
/// Dropping the returned future before completion leaves the slot untouched.
///
/// # Example
///
/// ```rust
/// use backstop::{async_against, AsyncRecovery, Guarded};
///
/// # tokio_test::block_on(async {
/// let mut cell = Guarded::new(1);
/// let odd = |x: &i32| {
///     let x = *x;
///     async move { x % 2 != 0 }
/// };
/// let next = |x: &i32| {
///     let x = *x;
///     async move { x + 1 }
/// };
///
/// async_against(&mut cell, odd, AsyncRecovery::with_current_async(next)).await;
/// assert_eq!(cell.into_inner(), 2);
/// # });
/// ```
pub async fn async_against<T, S, P>(
    slot: &mut S,
    predicate: P,
    recovery: AsyncRecovery<'_, T>,
) where
    S: Slot<T> + ?Sized,
    P: AsyncPredicate<T>,
{
    if !predicate.evaluate(<S as Slot<T>>::current(slot)).await {
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(recovery = recovery.kind(), "guard predicate held, replacing value");

    let replacement = recovery.resolve(<S as Slot<T>>::current(slot)).await;
    <S as Slot<T>>::store(slot, replacement);
}

/// Fallible form of [`against`].
///
/// Errors from `predicate` or `recover` are returned unchanged, and the slot
/// is only written when both succeed.
///
/// # Example
///
/// ```rust
/// use backstop::try_against;
///
/// let mut raw = String::from("  ");
/// let result = try_against(
///     &mut raw,
///     |s: &String| Ok::<_, String>(s.trim().is_empty()),
///     |_: &String| Err("no fallback configured".to_string()),
/// );
///
/// assert_eq!(result, Err("no fallback configured".to_string()));
/// assert_eq!(raw, "  ");
/// ```
pub fn try_against<T, S, E, P, R>(slot: &mut S, predicate: P, recover: R) -> Result<(), E>
where
    S: Slot<T> + ?Sized,
    P: FnOnce(&T) -> Result<bool, E>,
    R: FnOnce(&T) -> Result<T, E>,
{
    let holds = predicate(<S as Slot<T>>::current(slot)).inspect_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!("guard predicate failed, value left unchanged");
    })?;
    if !holds {
        return Ok(());
    }

    let replacement = recover(<S as Slot<T>>::current(slot)).inspect_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!("guard recovery failed, value left unchanged");
    })?;
    <S as Slot<T>>::store(slot, replacement);
    Ok(())
}

/// Fallible form of [`async_against`].
///
/// # Example
///
/// ```rust
/// use backstop::try_async_against;
///
/// # tokio_test::block_on(async {
/// let mut timeout_ms = 0_u64;
/// let result: Result<(), std::io::Error> = try_async_against(
///     &mut timeout_ms,
///     |t: &u64| {
///         let t = *t;
///         async move { Ok(t == 0) }
///     },
///     |_: &u64| async { Ok(30_000) },
/// )
/// .await;
///
/// assert!(result.is_ok());
/// assert_eq!(timeout_ms, 30_000);
/// # });
/// ```
pub async fn try_async_against<T, S, E, P, PFut, R, RFut>(
    slot: &mut S,
    predicate: P,
    recover: R,
) -> Result<(), E>
where
    S: Slot<T> + ?Sized,
    P: FnOnce(&T) -> PFut,
    PFut: Future<Output = Result<bool, E>>,
    R: FnOnce(&T) -> RFut,
    RFut: Future<Output = Result<T, E>>,
{
    let holds = predicate(<S as Slot<T>>::current(slot)).await.inspect_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!("guard predicate failed, value left unchanged");
    })?;
    if !holds {
        return Ok(());
    }

    let replacement = recover(<S as Slot<T>>::current(slot)).await.inspect_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!("guard recovery failed, value left unchanged");
    })?;
    <S as Slot<T>>::store(slot, replacement);
    Ok(())
}
