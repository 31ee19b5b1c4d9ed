//! # Backstop
//!
//! Guard clauses that repair values instead of rejecting them.
//!
//! A guard looks at a value, and if a predicate says the value is unusable
//! (absent, empty, zero, negative, out of range, untrimmed...), replaces it
//! with a default or with the result of a recovery computation. Nothing is
//! raised or collected: the value is fixed in place.
//!
//! ## Quick Example
//!
//! ```rust
//! use backstop::prelude::*;
//! use backstop::{collection, numeric, string};
//!
//! struct Settings {
//!     name: Option<String>,
//!     retries: i32,
//!     ratio: f64,
//!     tags: Vec<&'static str>,
//! }
//!
//! let mut settings = Settings {
//!     name: Some("  ".to_string()),
//!     retries: -1,
//!     ratio: 1.8,
//!     tags: vec!["a", "", "b"],
//! };
//!
//! string::against_none_or_whitespace(&mut settings.name, "default");
//! numeric::against_negative(&mut settings.retries, 3);
//! numeric::clamp_to_range(&mut settings.ratio, 0.0, 1.0);
//! collection::against_default_elements(&mut settings.tags);
//!
//! assert_eq!(settings.name.as_deref(), Some("default"));
//! assert_eq!(settings.retries, 3);
//! assert_eq!(settings.ratio, 1.0);
//! assert_eq!(settings.tags, vec!["a", "b"]);
//!
//! // The generic engine takes any predicate and recovery.
//! let mut port = Guarded::new(0_u16);
//! against(&mut port, |p: &u16| *p < 1024, Recovery::Value(8080));
//! assert_eq!(port.into_inner(), 8080);
//! ```
//!
//! ## Slots
//!
//! Every guard takes a `&mut S` where `S: Slot<T>`. That is either the value
//! itself (a direct binding, `&mut value`) or a [`Guarded<T>`] cell. Both
//! forms behave identically.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when a guard replaces a value.
//! - `decimal`: numeric guards for `rust_decimal::Decimal`.
//! - `proptest`: `Arbitrary` for [`Guarded<T>`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod against;
pub mod collection;
pub mod enumeration;
pub mod numeric;
pub mod object;
pub mod predicate;
pub mod recovery;
pub mod slot;
pub mod string;
pub mod testing;

// Re-exports
pub use against::{against, async_against, try_against, try_async_against};
pub use predicate::{AsyncPredicate, Predicate, PredicateExt};
pub use recovery::{AsyncRecovery, Recovery};
pub use slot::{Guarded, Slot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::against::{against, async_against, try_against, try_async_against};
    pub use crate::enumeration::Enumeration;
    pub use crate::numeric::{Numeric, SignedNumeric};
    pub use crate::predicate::{ready, AsyncPredicate, Predicate, PredicateExt};
    pub use crate::recovery::{AsyncRecovery, Recovery};
    pub use crate::slot::{Guarded, Slot};
}
