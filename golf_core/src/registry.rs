mod core;
mod model;

pub use self::core::ConfigError;
pub(crate) use self::core::{Entry, Registry};
pub use model::OptionDef;
