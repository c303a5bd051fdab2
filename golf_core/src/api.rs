mod capture;
mod core;
mod field;

pub use self::core::*;
pub(crate) use capture::AnonymousCapturable;
pub use capture::{InvalidCapture, OptionValue};
pub(crate) use field::bind;
pub use field::Value;
