//! Asynchronous predicates
//!
//! [`AsyncPredicate`] is the awaitable counterpart of
//! [`Predicate`](super::Predicate). Closures returning a future implement it
//! directly; synchronous predicates are lifted with [`ready`].

use super::combinators::Predicate;
use std::future::Future;

/// A predicate whose answer is produced by a future.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::{ready, AsyncPredicate, is_zero};
///
/// # tokio_test::block_on(async {
/// let odd = |x: &i32| {
///     let x = *x;
///     async move { x % 2 != 0 }
/// };
/// assert!(odd.evaluate(&3).await);
///
/// assert!(ready(is_zero()).evaluate(&0).await);
/// # });
/// ```
pub trait AsyncPredicate<T: ?Sized>: Send + Sync {
    /// Evaluate the predicate against `value`.
    fn evaluate(&self, value: &T) -> impl Future<Output = bool> + Send;
}

impl<T: ?Sized, F, Fut> AsyncPredicate<T> for F
where
    F: Fn(&T) -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send,
{
    #[inline]
    fn evaluate(&self, value: &T) -> impl Future<Output = bool> + Send {
        self(value)
    }
}

/// A synchronous predicate viewed as an [`AsyncPredicate`].
///
/// The wrapped predicate runs when [`evaluate`](AsyncPredicate::evaluate) is
/// called; the returned future is already complete.
#[derive(Clone, Copy, Debug)]
pub struct Ready<P>(pub P);

impl<T: ?Sized, P: Predicate<T> + Send + Sync> AsyncPredicate<T> for Ready<P> {
    #[inline]
    fn evaluate(&self, value: &T) -> impl Future<Output = bool> + Send {
        futures::future::ready(self.0.check(value))
    }
}

/// Lift a synchronous predicate into an [`AsyncPredicate`].
pub fn ready<P>(predicate: P) -> Ready<P> {
    Ready(predicate)
}
