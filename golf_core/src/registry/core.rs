use std::collections::HashMap;

use thiserror::Error;

use crate::api::AnonymousCapturable;
use crate::registry::model::OptionDef;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A mistake in the option setup (as opposed to a mistake in the Cli input).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a short nor a long flag was provided.
    #[error("cannot add option without a short or long flag")]
    Nameless,

    /// The short flag cannot be used on the Cli (ex: `-`, `=`, or whitespace).
    #[error("cannot add option with invalid short flag: '{0}'")]
    InvalidShort(char),

    /// The long flag cannot be used on the Cli (ex: empty, a leading `-`, or containing `=` or whitespace).
    #[error("cannot add option with invalid long flag: \"{0}\"")]
    InvalidLong(String),

    /// The short flag is already registered.
    #[error("cannot add option that duplicates short flag: '{0}'")]
    DuplicateShort(char),

    /// The long flag is already registered.
    #[error("cannot add option that duplicates long flag: \"{0}\"")]
    DuplicateLong(String),
}

pub(crate) struct Entry {
    def: OptionDef,
    capture: Box<dyn AnonymousCapturable>,
}

impl Entry {
    pub(crate) fn def(&self) -> &OptionDef {
        &self.def
    }

    pub(crate) fn capture_mut(&mut self) -> &mut dyn AnonymousCapturable {
        self.capture.as_mut()
    }
}

#[derive(Default)]
pub(crate) struct Registry {
    entries: Vec<Entry>,
    short_options: HashMap<char, usize>,
    long_options: HashMap<String, usize>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.def.flag()))
            .finish()
    }
}

impl Registry {
    pub(crate) fn insert(
        &mut self,
        def: OptionDef,
        capture: Box<dyn AnonymousCapturable>,
    ) -> Result<(), ConfigError> {
        // Validate everything before touching the lookup tables, so a rejected option leaves no trace.
        if def.short().is_none() && def.long().is_none() {
            return Err(ConfigError::Nameless);
        }

        if let Some(short) = def.short() {
            if short == '-' || short == '=' || short.is_whitespace() {
                return Err(ConfigError::InvalidShort(short));
            }

            if self.short_options.contains_key(&short) {
                return Err(ConfigError::DuplicateShort(short));
            }
        }

        if let Some(long) = def.long() {
            if long.is_empty()
                || long.starts_with('-')
                || long.contains(|c: char| c == '=' || c.is_whitespace())
            {
                return Err(ConfigError::InvalidLong(long.to_string()));
            }

            if self.long_options.contains_key(long) {
                return Err(ConfigError::DuplicateLong(long.to_string()));
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering option {def:?}.");
        }

        let index = self.entries.len();

        if let Some(short) = def.short() {
            self.short_options.insert(short, index);
        }

        if let Some(long) = def.long() {
            self.long_options.insert(long.to_string(), index);
        }

        self.entries.push(Entry { def, capture });
        Ok(())
    }

    pub(crate) fn lookup_short(&self, short: char) -> Option<&OptionDef> {
        self.short_options
            .get(&short)
            .map(|index| &self.entries[*index].def)
    }

    pub(crate) fn lookup_long(&self, long: &str) -> Option<&OptionDef> {
        self.long_options
            .get(long)
            .map(|index| &self.entries[*index].def)
    }

    pub(crate) fn entry_short(&mut self, short: char) -> Option<&mut Entry> {
        let index = *self.short_options.get(&short)?;
        self.entries.get_mut(index)
    }

    pub(crate) fn entry_long(&mut self, long: &str) -> Option<&mut Entry> {
        let index = *self.long_options.get(long)?;
        self.entries.get_mut(index)
    }

    pub(crate) fn options(&self) -> impl Iterator<Item = &OptionDef> {
        self.entries.iter().map(|entry| &entry.def)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Clearing {} option(s).", self.entries.len());
        }

        self.entries.clear();
        self.short_options.clear();
        self.long_options.clear();
    }
}

#[cfg(test)]
pub(crate) mod test {
    use crate::api::AnonymousCapturable;
    use crate::InvalidCapture;

    pub(crate) struct BlackHole {}

    impl Default for BlackHole {
        fn default() -> Self {
            Self {}
        }
    }

    impl AnonymousCapturable for BlackHole {
        fn matched(&mut self) {
            // Do nothing
        }

        fn capture(&mut self, _value: &str) -> Result<(), InvalidCapture> {
            // Do nothing
            Ok(())
        }
    }
}
