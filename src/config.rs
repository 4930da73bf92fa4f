//! Generator configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Everything is validated before generation starts.

use crate::entropy::EntropyStrategy;
use crate::wordlist::WordlistName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default number of words per passphrase.
pub const DEFAULT_NUM_WORDS: u32 = 5;

/// Passphrase generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Words per passphrase.
    pub num_words: u32,
    /// How die rolls are produced.
    pub entropy: EntropyStrategy,
    /// Which wordlist maps rolls to words.
    pub wordlist: WordlistName,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_words: DEFAULT_NUM_WORDS,
            entropy: EntropyStrategy::default(),
            wordlist: WordlistName::default(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the word count from an untrusted signed value.
    pub fn with_num_words(self, requested: i64) -> Result<Self, ConfigError> {
        let num_words = u32::try_from(requested)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidWordCount(requested))?;
        Ok(Self { num_words, ..self })
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_words == 0 {
            return Err(ConfigError::InvalidWordCount(0));
        }
        Ok(())
    }
}

/// Where wordlists are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordlistConfig {
    /// Directory holding the list files.
    pub directory: PathBuf,
    /// Pinned BLAKE3 fingerprints keyed by wordlist name.
    pub fingerprints: BTreeMap<String, String>,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("wordlists"),
            fingerprints: BTreeMap::new(),
        }
    }
}

impl WordlistConfig {
    /// Validates that every pinned fingerprint names a known list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.fingerprints.keys() {
            name.parse::<WordlistName>()?;
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid word count {0} (must be a positive integer)")]
    InvalidWordCount(i64),
    #[error("unknown wordlist {0:?} (expected eff, diceware or beale)")]
    UnknownWordlist(String),
    #[error("unknown entropy strategy {0:?} (expected secure-random or keystroke-timing)")]
    UnknownStrategy(String),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Generation settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Wordlist location and pins.
    #[serde(default)]
    pub wordlists: WordlistConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.wordlists.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.num_words, 5);
        assert_eq!(config.generator.wordlist, WordlistName::Eff);
    }

    #[test]
    fn test_zero_words_invalid() {
        let config = GeneratorConfig {
            num_words: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWordCount(0))
        ));
    }

    #[test]
    fn test_negative_override_rejected() {
        let result = GeneratorConfig::default().with_num_words(-3);
        assert!(matches!(result, Err(ConfigError::InvalidWordCount(-3))));

        let config = GeneratorConfig::default().with_num_words(8).unwrap();
        assert_eq!(config.num_words, 8);
    }

    #[test]
    fn test_parse_toml() {
        let config = FileConfig::from_toml(
            r#"
            [generator]
            num_words = 7
            entropy = "secure-random"
            wordlist = "beale"

            [wordlists]
            directory = "/usr/share/diceware"
            fingerprints = { beale = "abc123" }
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.num_words, 7);
        assert_eq!(config.generator.entropy, EntropyStrategy::SecureRandom);
        assert_eq!(config.generator.wordlist, WordlistName::Beale);
        assert_eq!(config.wordlists.directory, PathBuf::from("/usr/share/diceware"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FileConfig::from_toml("[generator]\nnum_words = 6\n").unwrap();

        assert_eq!(config.generator.num_words, 6);
        assert_eq!(config.generator.entropy, EntropyStrategy::KeystrokeTiming);
        assert_eq!(config.wordlists, WordlistConfig::default());
    }

    #[test]
    fn test_unknown_wordlist_rejected() {
        let result = FileConfig::from_toml("[generator]\nwordlist = \"klingon\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result = FileConfig::from_toml("[wordlists.fingerprints]\nklingon = \"00\"\n");
        assert!(matches!(result, Err(ConfigError::UnknownWordlist(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = FileConfig::from_file("/nonexistent/diceware.toml");
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }
}
