use std::slice::Iter;

use thiserror::Error;

use crate::api::InvalidCapture;
use crate::constant::*;
use crate::model::Flag;
use crate::registry::{Entry, Registry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A mistake in the Cli input.
///
/// All value related errors (malformed or missing) display with the prefix `cannot parse argument`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The flag is not registered.
    #[error("unknown option: {0}")]
    UnknownOption(Flag),

    /// A value-taking option is the final token, without an inline value.
    #[error("cannot parse argument for option {0}: missing value")]
    MissingValue(Flag),

    /// The value does not decode to the option's kind.
    #[error("cannot parse argument for option {flag}: {source}")]
    InvalidValue {
        /// The flag, as spelled on the Cli.
        flag: Flag,
        /// The underlying conversion failure.
        source: InvalidCapture,
    },

    /// A boolean option was given an inline value (ex: `--verbose=false`).
    #[error("option does not take a value: {0}")]
    UnexpectedValue(Flag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Options are recognized.
    Scanning,
    /// Entered upon the terminator; every token is positional.
    Literal,
}

/// A single parse over the registry.
///
/// Writes option values into their storage cells, and positional tokens into `positionals`.
pub(crate) struct Parser<'r> {
    registry: &'r mut Registry,
    positionals: &'r mut Vec<String>,
    mode: Mode,
}

impl<'r> std::fmt::Debug for Parser<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("registry", &self.registry)
            .field("mode", &self.mode)
            .finish()
    }
}

impl<'r> Parser<'r> {
    pub(crate) fn new(registry: &'r mut Registry, positionals: &'r mut Vec<String>) -> Self {
        Self {
            registry,
            positionals,
            mode: Mode::Scanning,
        }
    }

    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.positionals.clear();
        let mut token_iter = tokens.iter();

        while let Some(token) = token_iter.next() {
            if self.mode == Mode::Literal {
                self.positionals.push(token.to_string());
                continue;
            }

            // 1. The terminator '--' stops option matching for good.
            // 2. Find a 'long' flag, such as:
            //  --limit
            //  --limit ..
            //  --limit=..
            // 3. Find 'short' flag(s), such as (both -v and -l are example short flags):
            //  -v
            //  -l..
            //  -l ..
            //  -vl..
            //  -vl ..
            // 4. Anything else (including a bare '-') is positional.
            if *token == TERMINATOR {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminator found, switching to literal mode.");
                }

                self.mode = Mode::Literal;
            } else if let Some(body) = token.strip_prefix(LONG_PREFIX) {
                self.match_option(split_equals_delimiter(body), &mut token_iter)?;
            } else if let Some(body) = token
                .strip_prefix(SHORT_PREFIX)
                .filter(|body| !body.is_empty())
            {
                self.match_option_short(body, &mut token_iter)?;
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Positional '{token}'.");
                }

                self.positionals.push(token.to_string());
            }
        }

        Ok(())
    }

    fn match_option(
        &mut self,
        (option_name, inline): (&str, Option<&str>),
        token_iter: &mut Iter<'_, &str>,
    ) -> Result<(), ParseError> {
        let entry = self
            .registry
            .entry_long(option_name)
            .ok_or_else(|| ParseError::UnknownOption(Flag::Long(option_name.to_string())))?;
        let flag = Flag::Long(option_name.to_string());

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Long option {flag} (inline value: {inline:?}).");
        }

        if !entry.def().takes_value() {
            if inline.is_some() {
                return Err(ParseError::UnexpectedValue(flag));
            }

            entry.capture_mut().matched();
            return Ok(());
        }

        // An inline value always takes precedence over the next token.
        let value = match inline {
            Some(value) => value,
            None => token_iter
                .next()
                .copied()
                .ok_or_else(|| ParseError::MissingValue(flag.clone()))?,
        };
        assign(entry, flag, value)
    }

    fn match_option_short(
        &mut self,
        short_option_names: &str,
        token_iter: &mut Iter<'_, &str>,
    ) -> Result<(), ParseError> {
        for (index, single) in short_option_names.char_indices() {
            let entry = self
                .registry
                .entry_short(single)
                .ok_or(ParseError::UnknownOption(Flag::Short(single)))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Short option '{single}'.");
            }

            if !entry.def().takes_value() {
                // Flags may be bundled, so keep scanning the token.
                entry.capture_mut().matched();
                continue;
            }

            // A value-taking option swallows the remainder of the token.
            // Only when the remainder is empty is the value taken from the next token.
            let remainder = &short_option_names[index + single.len_utf8()..];
            let value = if remainder.is_empty() {
                token_iter
                    .next()
                    .copied()
                    .ok_or(ParseError::MissingValue(Flag::Short(single)))?
            } else {
                remainder
            };
            return assign(entry, Flag::Short(single), value);
        }

        Ok(())
    }
}

fn assign(entry: &mut Entry, flag: Flag, value: &str) -> Result<(), ParseError> {
    let capture = entry.capture_mut();
    capture.matched();
    capture
        .capture(value)
        .map_err(|source| ParseError::InvalidValue { flag, source })
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
