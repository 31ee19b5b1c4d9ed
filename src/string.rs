//! String guards
//!
//! Guards for absent, empty, blank, and untrimmed text. Everything except
//! [`against_none`] works on both `String` and `Option<String>` through the
//! [`Text`] capability; absent text is never trimmed.
//!
//! Whitespace is Unicode `White_Space`, as in [`char::is_whitespace`].
//!
//! # Example
//!
//! ```rust
//! use backstop::{string, Guarded};
//!
//! let mut name = Guarded::new(Some("  ".to_string()));
//! string::against_none_or_whitespace(&mut name, "anonymous");
//! assert_eq!(name.get().as_deref(), Some("anonymous"));
//!
//! let mut title = String::from("\t Report  ");
//! string::against_leading_or_trailing_whitespace(&mut title);
//! assert_eq!(title, "Report");
//! ```

use crate::against::against;
use crate::predicate::{
    has_leading_whitespace, has_trailing_whitespace, is_empty_text, is_none, is_none_or_empty,
    is_none_or_whitespace,
};
use crate::recovery::Recovery;
use crate::slot::{Guarded, Slot};

pub use crate::predicate::Text;

/// Ties a slot type to the text type it holds.
///
/// Implemented for `String` and `Option<String>` as direct bindings and for
/// their [`Guarded`] cells, so guards that take no default still know which
/// [`Text`] they operate on.
pub trait TextSlot {
    /// The text type held by the slot.
    type Text: Text;
}

impl TextSlot for String {
    type Text = String;
}

impl TextSlot for Option<String> {
    type Text = Option<String>;
}

impl TextSlot for Guarded<String> {
    type Text = String;
}

impl TextSlot for Guarded<Option<String>> {
    type Text = Option<String>;
}

/// Replace `None` with `Some(default)`.
pub fn against_none<S>(slot: &mut S, default: impl Into<String>)
where
    S: Slot<Option<String>> + ?Sized,
{
    against(slot, is_none(), Recovery::Value(Some(default.into())));
}

/// Replace present, empty text with `default`.
///
/// Absent text is left alone.
pub fn against_empty<T, S>(slot: &mut S, default: impl Into<String>)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against(slot, is_empty_text(), Recovery::Value(T::from_text(default.into())));
}

/// Replace absent or empty text with `default`.
///
/// # Example
///
/// ```rust
/// use backstop::string;
///
/// let mut greeting: Option<String> = None;
/// string::against_none_or_empty(&mut greeting, "hello");
/// assert_eq!(greeting.as_deref(), Some("hello"));
///
/// let mut greeting = Some("hi".to_string());
/// string::against_none_or_empty(&mut greeting, "hello");
/// assert_eq!(greeting.as_deref(), Some("hi"));
/// ```
pub fn against_none_or_empty<T, S>(slot: &mut S, default: impl Into<String>)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against(slot, is_none_or_empty(), Recovery::Value(T::from_text(default.into())));
}

/// Replace absent text, or text made only of whitespace, with `default`.
pub fn against_none_or_whitespace<T, S>(slot: &mut S, default: impl Into<String>)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against(
        slot,
        is_none_or_whitespace(),
        Recovery::Value(T::from_text(default.into())),
    );
}

/// Remove leading whitespace.
pub fn against_leading_whitespace<T, S>(slot: &mut S)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against(
        slot,
        has_leading_whitespace(),
        Recovery::with_current(|current: &T| trimmed(current, str::trim_start)),
    );
}

/// Remove trailing whitespace.
pub fn against_trailing_whitespace<T, S>(slot: &mut S)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against(
        slot,
        has_trailing_whitespace(),
        Recovery::with_current(|current: &T| trimmed(current, str::trim_end)),
    );
}

/// Remove leading, then trailing, whitespace.
///
/// # Example
///
/// ```rust
/// use backstop::string;
///
/// let mut value = Some("   x   ".to_string());
/// string::against_leading_or_trailing_whitespace(&mut value);
/// assert_eq!(value.as_deref(), Some("x"));
///
/// let mut value: Option<String> = None;
/// string::against_leading_or_trailing_whitespace(&mut value);
/// assert_eq!(value, None);
/// ```
pub fn against_leading_or_trailing_whitespace<T, S>(slot: &mut S)
where
    T: Text,
    S: TextSlot<Text = T> + Slot<T> + ?Sized,
{
    against_leading_whitespace(slot);
    against_trailing_whitespace(slot);
}

fn trimmed<T: Text>(current: &T, trim: fn(&str) -> &str) -> T {
    match current.as_text() {
        Some(text) => T::from_text(trim(text).to_owned()),
        None => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_against_none() {
        let mut value: Option<String> = None;
        against_none(&mut value, "fallback");
        assert_eq!(value.as_deref(), Some("fallback"));

        let mut cell = Guarded::new(Some(String::new()));
        against_none(&mut cell, "fallback");
        assert_eq!(cell.into_inner().as_deref(), Some(""));
    }

    #[test]
    fn test_against_empty_ignores_absent_text() {
        let mut value: Option<String> = None;
        against_empty(&mut value, "x");
        assert_eq!(value, None);

        let mut value = String::new();
        against_empty(&mut value, "x");
        assert_eq!(value, "x");

        let mut cell = Guarded::new(Some(" ".to_string()));
        against_empty(&mut cell, "x");
        assert_eq!(cell.into_inner().as_deref(), Some(" "));
    }

    #[test]
    fn test_against_none_or_empty() {
        for (start, expected) in [
            (None, Some("default")),
            (Some(""), Some("default")),
            (Some(" "), Some(" ")),
            (Some("value"), Some("value")),
        ] {
            let mut value = start.map(String::from);
            against_none_or_empty(&mut value, "default");
            assert_eq!(value.as_deref(), expected, "start = {:?}", start);
        }
    }

    #[test]
    fn test_against_none_or_whitespace() {
        let mut cell = Guarded::new(String::from(" \t\r\n"));
        against_none_or_whitespace(&mut cell, "blank");
        assert_eq!(cell.into_inner(), "blank");

        let mut value = Some(String::from(" a "));
        against_none_or_whitespace(&mut value, "blank");
        assert_eq!(value.as_deref(), Some(" a "));
    }

    #[test]
    fn test_trim_sides_independently() {
        let mut value = String::from("  both  ");
        against_leading_whitespace(&mut value);
        assert_eq!(value, "both  ");

        let mut value = String::from("  both  ");
        against_trailing_whitespace(&mut value);
        assert_eq!(value, "  both");
    }

    #[test]
    fn test_trim_leaves_empty_and_absent_text() {
        let mut value = String::new();
        against_leading_or_trailing_whitespace(&mut value);
        assert_eq!(value, "");

        let mut cell: Guarded<Option<String>> = Guarded::new(None);
        against_leading_or_trailing_whitespace(&mut cell);
        assert_eq!(cell.into_inner(), None);
    }

    #[test]
    fn test_whitespace_only_text_trims_to_empty() {
        let mut value = Some(String::from("   "));
        against_leading_or_trailing_whitespace(&mut value);
        assert_eq!(value.as_deref(), Some(""));
    }

    #[test]
    fn test_unicode_whitespace() {
        let mut value = String::from("\u{3000}text\u{00a0}");
        against_leading_or_trailing_whitespace(&mut value);
        assert_eq!(value, "text");
    }
}
