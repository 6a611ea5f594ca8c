//! File-based generation defaults.
//!
//! The CLI opens with the same defaults as a fresh form: length 16,
//! all four classes enabled. A TOML file can override those defaults;
//! it never changes the library's length bounds.

use super::request::{MAX_LENGTH, MIN_LENGTH};
use crate::charset::{CharacterClass, ClassSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Password length used when no flag is given.
    pub length: usize,
    /// Include ASCII uppercase letters.
    pub uppercase: bool,
    /// Include ASCII lowercase letters.
    pub lowercase: bool,
    /// Include ASCII digits.
    pub digits: bool,
    /// Include punctuation symbols.
    pub symbols: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl Defaults {
    /// The class set these defaults enable.
    ///
    /// May be empty when every class is switched off in the file; the
    /// request constructor rejects that case, it is not corrected here.
    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::EMPTY;
        if self.uppercase {
            classes.insert(CharacterClass::Uppercase);
        }
        if self.lowercase {
            classes.insert(CharacterClass::Lowercase);
        }
        if self.digits {
            classes.insert(CharacterClass::Digit);
        }
        if self.symbols {
            classes.insert(CharacterClass::Symbol);
        }
        classes
    }

    /// Validates the configured default length against the generator
    /// bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::InvalidDefaultLength {
                length: self.length,
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("default length {length} outside supported range")]
    InvalidDefaultLength {
        /// The configured length.
        length: usize,
    },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Generation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.defaults.validate()?;
        Ok(config)
    }
}
