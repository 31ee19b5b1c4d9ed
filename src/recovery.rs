//! Recovery strategies
//!
//! A recovery says where the replacement comes from once a guard's
//! predicate holds. Instead of one engine overload per producer shape, every
//! shape is a variant of an enum and the engine matches on it.
//!
//! [`against`](fn@crate::against) takes a [`Recovery`], which only has
//! synchronous producers:
//!
//! | Variant | Replacement |
//! |---------|-------------|
//! | [`Value`](Recovery::Value) | a ready-made value |
//! | [`Lazy`](Recovery::Lazy) | `f()` |
//! | [`WithCurrent`](Recovery::WithCurrent) | `f(&current)` |
//!
//! [`async_against`](crate::async_against) takes an [`AsyncRecovery`], which
//! adds two awaited variants:
//!
//! | Variant | Replacement |
//! |---------|-------------|
//! | [`AsyncLazy`](AsyncRecovery::AsyncLazy) | `f().await` |
//! | [`AsyncWithCurrent`](AsyncRecovery::AsyncWithCurrent) | `f(&current).await` |
//!
//! The producer runs at most once, and only after the predicate held.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;

type Produce<'a, T> = Box<dyn FnOnce() -> T + 'a>;
type Derive<'a, T> = Box<dyn FnOnce(&T) -> T + 'a>;
type ProduceSend<'a, T> = Box<dyn FnOnce() -> T + Send + 'a>;
type DeriveSend<'a, T> = Box<dyn FnOnce(&T) -> T + Send + 'a>;
type ProduceAsync<'a, T> = Box<dyn FnOnce() -> BoxFuture<'a, T> + Send + 'a>;
type DeriveAsync<'a, T> = Box<dyn FnOnce(&T) -> BoxFuture<'a, T> + Send + 'a>;

/// Where a synchronous guard's replacement value comes from.
///
/// Producers may capture non-thread-safe state such as `Rc` or `Cell`.
///
/// # Example
///
/// ```rust
/// use backstop::{against, Recovery};
///
/// let mut value = 7;
/// against(&mut value, |x: &i32| *x > 5, Recovery::with_current(|x: &i32| x - 5));
/// assert_eq!(value, 2);
///
/// let mut value = 7;
/// against(&mut value, |x: &i32| *x > 5, Recovery::lazy(|| 0));
/// assert_eq!(value, 0);
/// ```
pub enum Recovery<'a, T> {
    /// A constant replacement.
    Value(T),
    /// A zero-argument producer, called only when the predicate holds.
    Lazy(Produce<'a, T>),
    /// A producer that receives the pre-replacement value.
    WithCurrent(Derive<'a, T>),
}

impl<'a, T> Recovery<'a, T> {
    /// Replace with a ready-made value.
    pub fn value(value: T) -> Self {
        Recovery::Value(value)
    }

    /// Replace with the result of `f()`.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Recovery::Lazy(Box::new(f))
    }

    /// Replace with the result of `f(&current)`.
    pub fn with_current<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'a,
    {
        Recovery::WithCurrent(Box::new(f))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Recovery::Value(_) => "value",
            Recovery::Lazy(_) => "lazy",
            Recovery::WithCurrent(_) => "with_current",
        }
    }

    pub(crate) fn resolve(self, current: &T) -> T {
        match self {
            Recovery::Value(value) => value,
            Recovery::Lazy(f) => f(),
            Recovery::WithCurrent(f) => f(current),
        }
    }
}

impl<T> From<T> for Recovery<'_, T> {
    fn from(value: T) -> Self {
        Recovery::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Recovery<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recovery::Value(value) => f.debug_tuple("Value").field(value).finish(),
            other => f
                .debug_tuple("Recovery")
                .field(&format_args!("<{}>", other.kind()))
                .finish(),
        }
    }
}

/// Where an asynchronous guard's replacement value comes from.
///
/// Every producer is `Send`, so the future returned by
/// [`async_against`](crate::async_against) can move between threads.
///
/// # Example
///
/// ```rust
/// use backstop::{async_against, predicate::ready, AsyncRecovery};
///
/// # tokio_test::block_on(async {
/// let mut value = -1;
/// async_against(&mut value, ready(|x: &i32| *x < 0), AsyncRecovery::lazy_async(|| async { 10 })).await;
/// assert_eq!(value, 10);
///
/// async_against(&mut value, ready(|x: &i32| *x > 5), AsyncRecovery::with_current(|x: &i32| x / 2)).await;
/// assert_eq!(value, 5);
/// # });
/// ```
pub enum AsyncRecovery<'a, T> {
    /// A constant replacement.
    Value(T),
    /// A zero-argument producer.
    Lazy(ProduceSend<'a, T>),
    /// A producer that receives the pre-replacement value.
    WithCurrent(DeriveSend<'a, T>),
    /// A zero-argument asynchronous producer.
    AsyncLazy(ProduceAsync<'a, T>),
    /// An asynchronous producer that receives the pre-replacement value.
    AsyncWithCurrent(DeriveAsync<'a, T>),
}

impl<'a, T> AsyncRecovery<'a, T> {
    /// Replace with a ready-made value.
    pub fn value(value: T) -> Self {
        AsyncRecovery::Value(value)
    }

    /// Replace with the result of `f()`.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'a,
    {
        AsyncRecovery::Lazy(Box::new(f))
    }

    /// Replace with the result of `f(&current)`.
    pub fn with_current<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + Send + 'a,
    {
        AsyncRecovery::WithCurrent(Box::new(f))
    }

    /// Replace with the output of the future returned by `f()`.
    pub fn lazy_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = T> + Send + 'a,
    {
        AsyncRecovery::AsyncLazy(Box::new(move || f().boxed()))
    }

    /// Replace with the output of the future returned by `f(&current)`.
    ///
    /// The future may not borrow `current`; copy out what it needs first.
    pub fn with_current_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'a,
        Fut: Future<Output = T> + Send + 'a,
    {
        AsyncRecovery::AsyncWithCurrent(Box::new(move |current: &T| f(current).boxed()))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AsyncRecovery::Value(_) => "value",
            AsyncRecovery::Lazy(_) => "lazy",
            AsyncRecovery::WithCurrent(_) => "with_current",
            AsyncRecovery::AsyncLazy(_) => "async_lazy",
            AsyncRecovery::AsyncWithCurrent(_) => "async_with_current",
        }
    }

    /// Produce the replacement, awaiting asynchronous variants.
    pub(crate) async fn resolve(self, current: &T) -> T {
        match self {
            AsyncRecovery::Value(value) => value,
            AsyncRecovery::Lazy(f) => f(),
            AsyncRecovery::WithCurrent(f) => f(current),
            AsyncRecovery::AsyncLazy(f) => f().await,
            AsyncRecovery::AsyncWithCurrent(f) => f(current).await,
        }
    }
}

impl<T> From<T> for AsyncRecovery<'_, T> {
    fn from(value: T) -> Self {
        AsyncRecovery::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for AsyncRecovery<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsyncRecovery::Value(value) => f.debug_tuple("Value").field(value).finish(),
            other => f
                .debug_tuple("AsyncRecovery")
                .field(&format_args!("<{}>", other.kind()))
                .finish(),
        }
    }
}
