//! `golf` is a command line option parser for Rust.
//!
//! `golf` follows the traditional Unix option syntax rather than inventing its own:
//! POSIX style short options (`-v`) and GNU style long options (`--verbose`).
//! It prioritizes the following design concerns:
//! * *Typed options*:
//! Each option is registered with a kind (integer, unsigned integer, boolean, or string), and decoded accordingly.
//! The user never calls any `&str -> T` conversion functions directly.
//! * *Explicit state*:
//! Options live in an [`OptionRegistry`] owned by the caller; there is no process-wide parser.
//! Independent registries never interfere with each other.
//! * *Predictable errors*:
//! Error messages are stable and part of the public contract (see **Errors** below).
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/limit.rs")]
//! ```
//!
//! ```console
//! $ limit -vl4 --servers host1,host2 some other arguments
//! limit: 4
//! verbose: true
//! servers: host1,host2
//! arguments: ["some", "other", "arguments"]
//!
//! $ limit -l4 -- --verbose some other arguments
//! limit: 4
//! verbose: false
//! servers:
//! arguments: ["--verbose", "some", "other", "arguments"]
//!
//! $ limit --version
//! Parse error: unknown option: "version"
//! ```
//!
//! # Registration
//! Register options via the typed constructors [`OptionRegistry::integer`], [`OptionRegistry::unsigned`], [`OptionRegistry::boolean`], and [`OptionRegistry::string`].
//! Each takes an optional short name, an optional long name (at least one is required), a default, and a description.
//! Each returns a [`Value`]: the storage cell of the option, which holds the default until parsing overwrites it.
//!
//! A duplicate short or long name is a programming mistake, so the typed constructors panic on it.
//! Use [`OptionRegistry::register`] to receive the [`ConfigError`] instead.
//!
//! # Cli Semantics
//! `golf` parses the Cli tokens left to right, according to the following set of rules.
//!
//! * The token `--` ends option matching.
//! Every subsequent token is a positional argument, even if it looks like an option.
//! * Long options are matched by name: `--NAME`.
//! A value-taking long option reads its value from the `=` delimiter (`--limit=4`) or, otherwise, the next token (`--limit 4`).
//! Only the first `=` character is used as a delimiter; `--servers=a=b` has the value `a=b`.
//! * Short options are matched by character: `-N`.
//! A value-taking short option reads the remainder of its token (`-l4`) or, when there is no remainder, the next token (`-l 4`).
//! The remainder is always the value, verbatim; `-l=4` has the value `=4`.
//! * Boolean short options may be bundled into a single token: `-vq` is equivalent to `-v -q`.
//! The final option of a bundle may take a value: `-vl4` is equivalent to `-v -l 4`.
//! * A value taken from the next token is taken unconditionally; `--servers --verbose` sets `servers` to `--verbose`.
//! * Boolean options never take a value; `--verbose=false` is an error.
//! * Any other token (including a bare `-`) is a positional argument, available via [`OptionRegistry::args`].
//!
//! # Errors
//! Parsing stops at the first error.
//! Values assigned by earlier tokens are kept.
//!
//! ```console
//! Error                  | Message
//! ------------------------------------------------------------------------------------------------
//! unknown short option   | unknown option: 'a'
//! unknown long option    | unknown option: "version"
//! malformed value        | cannot parse argument for option 'l': cannot convert "four" to integer
//! missing value          | cannot parse argument for option "limit": missing value
//! boolean with a value   | option does not take a value: "verbose"
//! duplicate short flag   | cannot add option that duplicates short flag: 'f'
//! duplicate long flag    | cannot add option that duplicates long flag: "flubber"
//! ```
//!
//! Every value related error starts with `cannot parse argument`.
//!
//! # Features
//! * `tracing_debug`: Log registration and token matching via `tracing` at the debug level.
pub use golf_core::*;
