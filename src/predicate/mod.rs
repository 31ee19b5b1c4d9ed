//! Predicates describing invalid values
//!
//! Every guard in this crate is "replace the value when a predicate holds".
//! This module holds the predicate traits, the logical combinators, and the
//! concrete predicates the numeric, enumeration, text, and sequence guards
//! are built from. They are public so callers can reuse them with the generic
//! [`against`](crate::against) engine.
//!
//! # Example
//!
//! ```rust
//! use backstop::predicate::*;
//! use backstop::{against, Recovery};
//!
//! let mut port = 0_u16;
//! against(&mut port, is_zero().or(outside_range(1024, 49151)), Recovery::Value(8080));
//! assert_eq!(port, 8080);
//! ```

mod asynchronous;
mod combinators;
mod domain;
mod number;
mod sequence;
mod text;

// Core traits
pub use asynchronous::{ready, AsyncPredicate, Ready};
pub use combinators::{Predicate, PredicateExt};

// Combinators
pub use combinators::{is_none, none_or, And, IsNone, NoneOr, Not, Or};

// Number predicates
pub use number::{compare, is_negative, is_zero, outside_range, IsNegative, IsZero, OutsideRange};

// Enumeration predicates
pub use domain::{is_undefined, Enumeration, IsUndefined};

// Text predicates
pub use text::{
    has_leading_whitespace, has_trailing_whitespace, is_empty_text, is_none_or_empty,
    is_none_or_whitespace, HasLeadingWhitespace, HasTrailingWhitespace, IsEmptyText,
    IsNoneOrEmpty, IsNoneOrWhitespace, Text,
};

// Sequence predicates
pub use sequence::{
    has_default_elements, has_none_elements, has_values_outside, is_empty_sequence,
    is_none_or_empty_sequence, DesiredSet, HasDefaultElements, HasNoneElements,
    HasValuesOutside, IsEmptySequence, IsNoneOrEmptySequence, Sequence,
};
