use crate::model::{Flag, Kind};

/// The definition of a registered option.
///
/// Obtained via [`OptionRegistry::lookup_short`](crate::OptionRegistry::lookup_short),
/// [`OptionRegistry::lookup_long`](crate::OptionRegistry::lookup_long),
/// or [`OptionRegistry::options`](crate::OptionRegistry::options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDef {
    short: Option<char>,
    long: Option<String>,
    kind: Kind,
    default: String,
    description: String,
}

impl OptionDef {
    pub(crate) fn new(
        short: Option<char>,
        long: Option<String>,
        kind: Kind,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            short,
            long,
            kind,
            default: default.into(),
            description: description.into(),
        }
    }

    /// The short name, used as `-c`.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name, used as `--name`.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The kind of value held by this option.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether this option must be followed by a value on the Cli.
    pub fn takes_value(&self) -> bool {
        self.kind.takes_value()
    }

    /// The default value, rendered as text.
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// The description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The preferred flag to refer to this option by: the long name if present, otherwise the short name.
    pub fn flag(&self) -> Flag {
        match (&self.long, self.short) {
            (Some(long), _) => Flag::Long(long.clone()),
            (None, Some(short)) => Flag::Short(short),
            (None, None) => unreachable!("internal error - an option must have a short or long flag"),
        }
    }
}
