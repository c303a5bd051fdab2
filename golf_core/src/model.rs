/// The kind of value an option holds.
///
/// Each kind corresponds to exactly one Rust storage type (see [`OptionValue`](crate::OptionValue)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A signed integer, stored as `i64`.
    Integer,
    /// An unsigned integer, stored as `u64`.
    Unsigned,
    /// A presence flag, stored as `bool`.
    Boolean,
    /// Free text, stored as `String`.
    String,
}

impl Kind {
    /// Whether an option of this kind must be followed by a value on the Cli.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Kind::Boolean)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Unsigned => "unsigned integer",
            Kind::Boolean => "boolean",
            Kind::String => "string",
        };
        write!(f, "{name}")
    }
}

/// An option flag, as spelled on the Cli.
///
/// Displays with single quotes for short flags (`'v'`) and double quotes for long flags (`"verbose"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `-c`
    Short(char),
    /// `--name`
    Long(String),
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flag::Short(single) => write!(f, "'{single}'"),
            Flag::Long(name) => write!(f, "\"{name}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Integer, "integer", true)]
    #[case(Kind::Unsigned, "unsigned integer", true)]
    #[case(Kind::Boolean, "boolean", false)]
    #[case(Kind::String, "string", true)]
    fn kind_display(#[case] kind: Kind, #[case] display: &str, #[case] takes_value: bool) {
        assert_eq!(kind.to_string(), display);
        assert_eq!(kind.takes_value(), takes_value);
    }

    #[rstest]
    #[case(Flag::Short('v'), "'v'")]
    #[case(Flag::Short('é'), "'é'")]
    #[case(Flag::Long("verbose".to_string()), "\"verbose\"")]
    #[case(Flag::Long("dry-run".to_string()), "\"dry-run\"")]
    fn flag_display(#[case] flag: Flag, #[case] expected: &str) {
        assert_eq!(flag.to_string(), expected);
    }
}
