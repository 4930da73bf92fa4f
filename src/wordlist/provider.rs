//! Loads named wordlists from a local directory.
//!
//! Lists are read in the published `"<index>\t<word>"` format. Fetching
//! them and checking their signatures happens before they reach this
//! directory; here they are only parsed, validated, and optionally
//! pinned to a known fingerprint.

use super::{WordLookup, WordlistError};
use crate::config::{ConfigError, WordlistConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported wordlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordlistName {
    /// EFF large wordlist, the most usable of the three.
    #[default]
    Eff,
    /// Arnold Reinhold's original Diceware list.
    Diceware,
    /// Alan Beale's alternative list.
    Beale,
}

impl WordlistName {
    /// All supported lists.
    pub const ALL: [WordlistName; 3] = [Self::Eff, Self::Diceware, Self::Beale];

    /// File name the list is stored under.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Eff => "eff_large_wordlist.txt",
            Self::Diceware => "diceware.wordlist.asc",
            Self::Beale => "beale.wordlist.asc",
        }
    }
}

impl std::fmt::Display for WordlistName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eff => write!(f, "eff"),
            Self::Diceware => write!(f, "diceware"),
            Self::Beale => write!(f, "beale"),
        }
    }
}

impl FromStr for WordlistName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownWordlist(s.to_string()))
    }
}

/// Resolves wordlist names to validated lookups.
#[derive(Debug, Clone)]
pub struct WordlistProvider {
    directory: PathBuf,
    fingerprints: HashMap<WordlistName, String>,
}

impl WordlistProvider {
    /// Creates a provider reading lists from `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            fingerprints: HashMap::new(),
        }
    }

    /// Creates a provider from configuration, including pinned fingerprints.
    pub fn from_config(config: &WordlistConfig) -> Result<Self, ConfigError> {
        let mut provider = Self::new(&config.directory);
        for (name, fingerprint) in &config.fingerprints {
            provider = provider.with_fingerprint(name.parse()?, fingerprint);
        }
        Ok(provider)
    }

    /// Pins the expected fingerprint of a list.
    pub fn with_fingerprint(mut self, name: WordlistName, fingerprint: impl Into<String>) -> Self {
        self.fingerprints
            .insert(name, fingerprint.into().to_ascii_lowercase());
        self
    }

    /// Returns the directory lists are read from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the path a list is read from.
    pub fn path_for(&self, name: WordlistName) -> PathBuf {
        self.directory.join(name.file_name())
    }

    /// Reads, parses and validates a list.
    pub fn load(&self, name: WordlistName) -> Result<WordLookup, WordlistError> {
        let path = self.path_for(name);
        let text = std::fs::read_to_string(&path).map_err(|source| WordlistError::Io {
            path: path.clone(),
            source,
        })?;

        let lookup = WordLookup::parse(&text)?;
        lookup.validate()?;

        let fingerprint = lookup.fingerprint();
        if let Some(expected) = self.fingerprints.get(&name) {
            if *expected != fingerprint {
                return Err(WordlistError::FingerprintMismatch {
                    name,
                    expected: expected.clone(),
                    found: fingerprint,
                });
            }
        }

        tracing::info!(
            wordlist = %name,
            entries = lookup.len(),
            fingerprint = %fingerprint,
            "Loaded wordlist"
        );
        tracing::debug!(path = %path.display(), "Wordlist source");

        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::{WordIndex, WORDLIST_SIZE};
    use std::fmt::Write;

    fn write_list(dir: &Path, name: WordlistName, count: usize) {
        let mut text = String::new();
        for (n, index) in WordIndex::all().take(count).enumerate() {
            writeln!(text, "{index}\t{name}{n}").unwrap();
        }
        std::fs::write(dir.join(name.file_name()), text).unwrap();
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("eff".parse::<WordlistName>().unwrap(), WordlistName::Eff);
        assert_eq!("BEALE".parse::<WordlistName>().unwrap(), WordlistName::Beale);
        assert!(matches!(
            "klingon".parse::<WordlistName>(),
            Err(ConfigError::UnknownWordlist(_))
        ));
    }

    #[test]
    fn test_load_valid_list() {
        let dir = tempfile::tempdir().unwrap();
        write_list(dir.path(), WordlistName::Diceware, WORDLIST_SIZE);

        let lookup = WordlistProvider::new(dir.path())
            .load(WordlistName::Diceware)
            .unwrap();

        assert_eq!(lookup.len(), WORDLIST_SIZE);
        assert_eq!(lookup.get(WordIndex::MIN).unwrap(), "diceware0");
    }

    #[test]
    fn test_short_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_list(dir.path(), WordlistName::Eff, WORDLIST_SIZE - 1);

        let result = WordlistProvider::new(dir.path()).load(WordlistName::Eff);

        assert!(matches!(
            result,
            Err(WordlistError::WrongSize { found: 7775, expected: 7776 })
        ));
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordlistProvider::new(dir.path()).load(WordlistName::Beale);
        assert!(matches!(result, Err(WordlistError::Io { .. })));
    }

    #[test]
    fn test_fingerprint_pinning() {
        let dir = tempfile::tempdir().unwrap();
        write_list(dir.path(), WordlistName::Eff, WORDLIST_SIZE);

        let provider = WordlistProvider::new(dir.path());
        let fingerprint = provider.load(WordlistName::Eff).unwrap().fingerprint();

        let pinned = provider
            .clone()
            .with_fingerprint(WordlistName::Eff, fingerprint.to_ascii_uppercase());
        assert!(pinned.load(WordlistName::Eff).is_ok());

        let wrong = provider.with_fingerprint(WordlistName::Eff, "00".repeat(32));
        assert!(matches!(
            wrong.load(WordlistName::Eff),
            Err(WordlistError::FingerprintMismatch { .. })
        ));
    }
}
