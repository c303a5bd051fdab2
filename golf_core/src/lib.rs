//! Core module for `golf`.
//! See [documentation root](https://docs.rs/golf/latest/golf/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
mod registry;

pub use api::*;
pub use model::*;
pub use parser::ParseError;
pub use registry::{ConfigError, OptionDef};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
