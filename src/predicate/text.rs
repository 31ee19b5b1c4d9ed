//! Text predicates
//!
//! Predicates over anything implementing [`Text`]: an owned `String`, which is
//! always present, or an `Option<String>`, which may be absent.

use super::combinators::Predicate;
use std::marker::PhantomData;

/// A possibly absent piece of text.
///
/// # Example
///
/// ```rust
/// use backstop::predicate::Text;
///
/// assert_eq!(String::from("hi").as_text(), Some("hi"));
/// assert_eq!(None::<String>.as_text(), None);
/// assert_eq!(<Option<String>>::from_text("x".into()), Some("x".to_string()));
/// ```
pub trait Text: Clone {
    /// Borrow the text, or `None` when absent.
    fn as_text(&self) -> Option<&str>;

    /// Build a present value from owned text.
    fn from_text(text: String) -> Self;
}

impl Text for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    #[inline]
    fn from_text(text: String) -> Self {
        text
    }
}

impl Text for Option<String> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }

    #[inline]
    fn from_text(text: String) -> Self {
        Some(text)
    }
}

macro_rules! text_predicate {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, |$text:ident| $body:expr) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<fn(&T) -> bool>);

        impl<T: Text> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                let $text = value.as_text();
                $body
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate.")]
        pub fn $ctor<T: Text>() -> $name<T> {
            $name(PhantomData)
        }
    };
}

text_predicate!(
    /// Holds for present, empty text.
    IsEmptyText,
    is_empty_text,
    |text| text == Some("")
);

text_predicate!(
    /// Holds for absent or empty text.
    IsNoneOrEmpty,
    is_none_or_empty,
    |text| text.map_or(true, str::is_empty)
);

text_predicate!(
    /// Holds for absent text or text made only of whitespace (including `""`).
    IsNoneOrWhitespace,
    is_none_or_whitespace,
    |text| text.map_or(true, |s| s.chars().all(char::is_whitespace))
);

text_predicate!(
    /// Holds for present, non-empty text whose first character is whitespace.
    HasLeadingWhitespace,
    has_leading_whitespace,
    |text| text
        .and_then(|s| s.chars().next())
        .is_some_and(char::is_whitespace)
);

text_predicate!(
    /// Holds for present, non-empty text whose last character is whitespace.
    HasTrailingWhitespace,
    has_trailing_whitespace,
    |text| text
        .and_then(|s| s.chars().next_back())
        .is_some_and(char::is_whitespace)
);
