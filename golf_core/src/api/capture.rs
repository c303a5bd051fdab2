use std::str::FromStr;

use thiserror::Error;

use crate::model::Kind;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// A Rust type which may back the storage cell of an option.
///
/// Implemented for the four supported kinds only:
/// `i64` (integer), `u64` (unsigned integer), `bool` (boolean), and `String` (string).
pub trait OptionValue: sealed::Sealed + Clone + std::fmt::Display + 'static {
    /// The option kind this type represents.
    const KIND: Kind;

    /// Decode a Cli token into this type.
    fn decode(token: &str) -> Result<Self, InvalidCapture>;

    /// The value assigned when the flag is present on the Cli without a value.
    ///
    /// Only flag-like kinds (boolean) have one.
    fn presence() -> Option<Self> {
        None
    }
}

fn convert<T: FromStr>(token: &str, kind: Kind) -> Result<T, InvalidCapture> {
    T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        kind,
    })
}

impl OptionValue for i64 {
    const KIND: Kind = Kind::Integer;

    fn decode(token: &str) -> Result<Self, InvalidCapture> {
        convert(token, Self::KIND)
    }
}

impl OptionValue for u64 {
    const KIND: Kind = Kind::Unsigned;

    fn decode(token: &str) -> Result<Self, InvalidCapture> {
        convert(token, Self::KIND)
    }
}

impl OptionValue for bool {
    const KIND: Kind = Kind::Boolean;

    fn decode(token: &str) -> Result<Self, InvalidCapture> {
        convert(token, Self::KIND)
    }

    fn presence() -> Option<Self> {
        Some(true)
    }
}

impl OptionValue for String {
    const KIND: Kind = Kind::String;

    fn decode(token: &str) -> Result<Self, InvalidCapture> {
        Ok(token.to_string())
    }
}

/// The reason a Cli token could not be captured into an option.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// The token does not decode to the option's kind.
    #[error("cannot convert \"{token}\" to {kind}")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The kind the token was meant to decode to.
        kind: Kind,
    },
}

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the bottom of the registry object graph so the compiler can maintain each option's type.
pub(crate) trait GenericCapturable<T> {
    /// Declare that the option has been matched.
    fn matched(&mut self);

    /// Capture a value into the generic type T for this option.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the registry object graph so that options of different types may all be held in a single registry.
pub(crate) trait AnonymousCapturable {
    /// Declare that the option has been matched.
    fn matched(&mut self);

    /// Capture a value anonymously for this option.
    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture>;
}

pub(crate) struct AnonymousCapture<T> {
    field: Box<dyn GenericCapturable<T>>,
}

impl<T> AnonymousCapture<T> {
    pub(crate) fn bind(field: impl GenericCapturable<T> + 'static) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<T> AnonymousCapturable for AnonymousCapture<T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture> {
        self.field.capture(value)
    }
}
