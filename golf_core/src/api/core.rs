use std::env;

use crate::api::{bind, OptionValue, Value};
use crate::parser::{ParseError, Parser};
use crate::registry::{ConfigError, OptionDef, Registry};

/// The set of registered options, and the parser which runs over them.
///
/// Register options first (each registration hands back the option's storage [`Value`]), then parse.
///
/// ### Example
/// ```
/// # use golf_core as golf;
/// use golf::OptionRegistry;
///
/// let mut registry = OptionRegistry::new();
/// let limit = registry.integer(Some('l'), Some("limit"), 0, "limit results");
/// let verbose = registry.boolean(Some('v'), Some("verbose"), false, "print verbose info");
///
/// registry.parse_tokens(&["-vl4", "some", "file"]).unwrap();
///
/// assert_eq!(limit.get(), 4);
/// assert!(verbose.get());
/// assert_eq!(registry.args(), &["some", "file"]);
/// ```
#[derive(Default)]
pub struct OptionRegistry {
    registry: Registry,
    positionals: Vec<String>,
    parsed: bool,
}

impl std::fmt::Debug for OptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("options", &self.registry)
            .field("positionals", &self.positionals)
            .field("parsed", &self.parsed)
            .finish()
    }
}

impl OptionRegistry {
    /// Create an empty option registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option, returning its storage cell (initialized to `default`).
    ///
    /// At least one of `short` or `long` must be provided, and neither may already be registered.
    /// A rejected registration leaves the registry unchanged.
    ///
    /// ### Example
    /// ```
    /// # use golf_core as golf;
    /// use golf::{ConfigError, OptionRegistry};
    ///
    /// let mut registry = OptionRegistry::new();
    /// registry.register(Some('f'), Some("flubber"), 0u64, "some example flag").unwrap();
    ///
    /// let error = registry
    ///     .register(Some('f'), Some("blubber"), 0u64, "some example flag")
    ///     .unwrap_err();
    /// assert_eq!(error, ConfigError::DuplicateShort('f'));
    /// ```
    pub fn register<T: OptionValue>(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        default: T,
        description: impl Into<String>,
    ) -> Result<Value<T>, ConfigError> {
        let def = OptionDef::new(
            short,
            long.map(str::to_string),
            T::KIND,
            default.to_string(),
            description,
        );
        let variable = Value::new(default);
        self.registry.insert(def, bind(variable.clone()))?;
        Ok(variable)
    }

    /// Register an integer (`i64`) option.
    ///
    /// # Panics
    /// On any [`ConfigError`] (ex: a duplicate flag), with the error's message.
    /// Use [`OptionRegistry::register`] to handle the error instead.
    pub fn integer(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        default: i64,
        description: impl Into<String>,
    ) -> Value<i64> {
        fatal(self.register(short, long, default, description))
    }

    /// Register an unsigned integer (`u64`) option.
    ///
    /// # Panics
    /// On any [`ConfigError`], with the error's message.
    pub fn unsigned(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        default: u64,
        description: impl Into<String>,
    ) -> Value<u64> {
        fatal(self.register(short, long, default, description))
    }

    /// Register a boolean option.
    /// Its presence on the Cli sets the value to `true`; it never takes a value.
    ///
    /// # Panics
    /// On any [`ConfigError`], with the error's message.
    pub fn boolean(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        default: bool,
        description: impl Into<String>,
    ) -> Value<bool> {
        fatal(self.register(short, long, default, description))
    }

    /// Register a string option.
    ///
    /// # Panics
    /// On any [`ConfigError`], with the error's message.
    pub fn string(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Value<String> {
        fatal(self.register(short, long, default.into(), description))
    }

    /// Find an option by its short name.
    pub fn lookup_short(&self, short: char) -> Option<&OptionDef> {
        self.registry.lookup_short(short)
    }

    /// Find an option by its long name.
    pub fn lookup_long(&self, long: &str) -> Option<&OptionDef> {
        self.registry.lookup_long(long)
    }

    /// The registered options, in registration order.
    pub fn options(&self) -> impl Iterator<Item = &OptionDef> {
        self.registry.options()
    }

    /// The number of registered options.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no options are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Clear all registered options and positional arguments.
    ///
    /// Previously returned [`Value`]s keep their last value, but are no longer written by parsing.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.positionals.clear();
        self.parsed = false;
    }

    /// Run the parser against the input tokens.
    ///
    /// Tokens are processed left to right:
    /// * `--` ends option matching; every later token is positional.
    /// * `--name`, `--name VALUE`, `--name=VALUE` match a long option.
    /// * `-c`, `-c VALUE`, `-cVALUE` match a short option.
    /// Boolean short options may be bundled (`-vq`), optionally followed by a single value-taking option (`-vl4`).
    /// * Anything else, including a bare `-`, is positional.
    ///
    /// On error, scanning stops at the offending token.
    /// Values assigned by earlier tokens are kept.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parsed = false;
        Parser::new(&mut self.registry, &mut self.positionals).consume(tokens)?;
        self.parsed = true;
        Ok(())
    }

    /// Run the parser against a whitespace delimited line of tokens.
    ///
    /// ### Example
    /// ```
    /// # use golf_core as golf;
    /// use golf::OptionRegistry;
    ///
    /// let mut registry = OptionRegistry::new();
    /// let servers = registry.string(Some('s'), Some("servers"), "", "ask servers");
    ///
    /// registry.parse_line("-s host1,host2  some other arguments").unwrap();
    ///
    /// assert_eq!(servers.get(), "host1,host2");
    /// assert_eq!(registry.args(), &["some", "other", "arguments"]);
    /// ```
    pub fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        self.parse_tokens(tokens.as_slice())
    }

    /// Run the parser against the Cli [`env::args`] (excluding the program name).
    pub fn parse_env(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Whether the most recent parse succeeded.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// The positional arguments left over by the most recent parse.
    pub fn args(&self) -> &[String] {
        &self.positionals
    }

    /// The `i`th positional argument.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.positionals.get(i).map(String::as_str)
    }

    /// The number of positional arguments.
    pub fn narg(&self) -> usize {
        self.positionals.len()
    }
}

fn fatal<T>(result: Result<Value<T>, ConfigError>) -> Value<T> {
    match result {
        Ok(variable) => variable,
        Err(error) => panic!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flag, Kind};
    use rstest::rstest;

    #[test]
    fn registry_empty() {
        let mut registry = OptionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.parsed());

        registry.parse_tokens(&[]).unwrap();

        assert!(registry.parsed());
        assert_eq!(registry.narg(), 0);
        assert_eq!(registry.arg(0), None);
    }

    #[test]
    fn register_defaults() {
        // Setup
        let mut registry = OptionRegistry::new();

        // Execute
        let limit = registry.integer(Some('l'), Some("limit"), -1, "limit results");
        let count = registry.unsigned(Some('c'), None, 3, "count");
        let verbose = registry.boolean(None, Some("verbose"), false, "print verbose info");
        let servers = registry.string(Some('s'), Some("servers"), "localhost", "ask servers");

        // Verify
        assert_eq!(limit.get(), -1);
        assert_eq!(count.get(), 3);
        assert!(!verbose.get());
        assert_eq!(servers.get(), "localhost");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn register_definitions() {
        let mut registry = OptionRegistry::new();
        registry.integer(Some('l'), Some("limit"), 10, "limit results");
        registry.boolean(Some('v'), None, false, "print verbose info");

        let limit = registry.lookup_long("limit").unwrap();
        assert_eq!(limit.short(), Some('l'));
        assert_eq!(limit.kind(), Kind::Integer);
        assert_eq!(limit.default_text(), "10");
        assert_eq!(limit.description(), "limit results");
        assert_eq!(registry.lookup_short('l'), Some(limit));

        let verbose = registry.lookup_short('v').unwrap();
        assert_eq!(verbose.long(), None);
        assert_eq!(verbose.flag(), Flag::Short('v'));
        assert_eq!(verbose.default_text(), "false");

        let flags: Vec<Flag> = registry.options().map(OptionDef::flag).collect();
        assert_eq!(flags, vec![Flag::Long("limit".to_string()), Flag::Short('v')]);
    }

    #[rstest]
    #[case(Some('f'), Some("blubber"), ConfigError::DuplicateShort('f'))]
    #[case(Some('b'), Some("flubber"), ConfigError::DuplicateLong("flubber".to_string()))]
    #[case(None, None, ConfigError::Nameless)]
    fn register_error(
        #[case] short: Option<char>,
        #[case] long: Option<&str>,
        #[case] expected: ConfigError,
    ) {
        // Setup
        let mut registry = OptionRegistry::new();
        registry.unsigned(Some('f'), Some("flubber"), 0, "some example flag");

        // Execute
        let error = registry
            .register(short, long, 0u64, "some example flag")
            .unwrap_err();

        // Verify
        assert_eq!(error, expected);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot add option that duplicates short flag: 'f'")]
    fn duplicate_short_panics() {
        let mut registry = OptionRegistry::new();
        registry.unsigned(Some('f'), Some("flubber"), 0, "some example flag");
        registry.unsigned(Some('f'), Some("blubber"), 0, "some example flag");
    }

    #[test]
    #[should_panic(expected = "cannot add option that duplicates long flag: \"flubber\"")]
    fn duplicate_long_panics() {
        let mut registry = OptionRegistry::new();
        registry.unsigned(Some('f'), Some("flubber"), 0, "some example flag");
        registry.unsigned(Some('b'), Some("flubber"), 0, "some example flag");
    }

    #[test]
    fn parse_line_positionals() {
        // Setup
        let mut registry = OptionRegistry::new();
        let limit = registry.integer(Some('l'), Some("limit"), 0, "limit results");

        // Execute
        registry.parse_line("  a\t-l 4\nb  ").unwrap();

        // Verify
        assert_eq!(limit.get(), 4);
        assert_eq!(registry.args(), &["a", "b"]);
        assert_eq!(registry.narg(), 2);
        assert_eq!(registry.arg(0), Some("a"));
        assert_eq!(registry.arg(1), Some("b"));
        assert_eq!(registry.arg(2), None);
    }

    #[test]
    fn parse_while_value_held() {
        // Setup
        let mut registry = OptionRegistry::new();
        let servers = registry.string(Some('s'), Some("servers"), "localhost", "ask servers");
        let held = servers.clone();
        let before = held.get();

        // Execute
        registry.parse_line("-s host").unwrap();

        // Verify
        assert_eq!(before, "localhost");
        assert_eq!(held.get(), "host");
        assert_eq!(format!("{servers:?}"), "Value(\"host\")");

        // Reading in between parses never blocks the next write.
        let during = servers.get();
        registry.parse_line("--servers=other").unwrap();
        assert_eq!(during, "host");
        assert_eq!(servers.get(), "other");
    }

    #[test]
    fn parse_failure() {
        // Setup
        let mut registry = OptionRegistry::new();
        registry.parse_line("a").unwrap();
        assert!(registry.parsed());

        // Execute
        let error = registry.parse_line("-x").unwrap_err();

        // Verify
        assert_eq!(error, ParseError::UnknownOption(Flag::Short('x')));
        assert!(!registry.parsed());
        assert_eq!(registry.narg(), 0);
    }

    #[test]
    fn reset() {
        // Setup
        let mut registry = OptionRegistry::new();
        let first = registry.integer(Some('l'), Some("limit"), 0, "limit results");
        registry.parse_line("-l 4 a").unwrap();

        // Execute
        registry.reset();

        // Verify
        assert!(registry.is_empty());
        assert!(!registry.parsed());
        assert_eq!(registry.narg(), 0);
        assert_eq!(
            registry.parse_line("-l 5").unwrap_err(),
            ParseError::UnknownOption(Flag::Short('l'))
        );

        // The flag may be registered again, independently of the first registration.
        let second = registry.integer(Some('l'), Some("limit"), 0, "limit results");
        registry.parse_line("-l 5").unwrap();
        assert_eq!(first.get(), 4);
        assert_eq!(second.get(), 5);
    }

    #[test]
    fn debug() {
        let mut registry = OptionRegistry::new();
        registry.boolean(Some('v'), Some("verbose"), false, "print verbose info");
        assert_eq!(
            format!("{registry:?}"),
            "OptionRegistry { options: [Long(\"verbose\")], positionals: [], parsed: false }"
        );
    }
}
