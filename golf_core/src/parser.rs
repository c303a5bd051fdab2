mod base;

pub use base::ParseError;
pub(crate) use base::Parser;
