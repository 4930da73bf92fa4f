//! Immutable index-to-word mapping.

use super::index::{WordIndex, WORDLIST_SIZE};
use super::{LookupError, WordlistError};
use std::collections::{BTreeMap, HashSet};

/// Domain separator for wordlist fingerprints.
const FINGERPRINT_DOMAIN: &[u8] = b"diceware-roller-wordlist-v1";

/// Maps each [`WordIndex`] to its word.
///
/// A lookup may be built from any set of entries; [`WordLookup::validate`]
/// checks the completeness and uniqueness a passphrase's entropy depends
/// on. Lookups are never mutated after construction and can be shared
/// freely across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct WordLookup {
    words: BTreeMap<WordIndex, String>,
}

impl WordLookup {
    /// Builds a lookup from index/word pairs, rejecting repeated indices.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (WordIndex, String)>,
    ) -> Result<Self, WordlistError> {
        let mut words = BTreeMap::new();
        for (index, word) in pairs {
            if words.insert(index, word).is_some() {
                return Err(WordlistError::DuplicateIndex(index));
            }
        }
        Ok(Self { words })
    }

    /// Builds a lookup from a bare word sequence, assigning indices in
    /// ascending numeric order. Words past the 7776th are ignored.
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: WordIndex::all()
                .zip(words)
                .map(|(index, word)| (index, word.into()))
                .collect(),
        }
    }

    /// Parses the `"<index>\t<word>"` row format.
    ///
    /// Lines whose first field is not five digits are skipped, which drops
    /// blank lines and any surrounding PGP armor. Everything after the tab
    /// is the word, spaces included. A five-digit key with a digit outside
    /// `1..=6`, or a key not followed by a tab and a word, is an error.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        let mut pairs = Vec::with_capacity(WORDLIST_SIZE);

        for (number, line) in text.lines().enumerate() {
            let line_no = number + 1;
            let key = line
                .split(|c: char| c.is_ascii_whitespace())
                .next()
                .unwrap_or_default();
            if key.len() != 5 || !key.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }

            let index = key
                .parse::<u32>()
                .ok()
                .and_then(WordIndex::new)
                .ok_or_else(|| WordlistError::InvalidIndex {
                    line: line_no,
                    key: key.to_string(),
                })?;
            let word = line[key.len()..]
                .strip_prefix('\t')
                .filter(|word| !word.trim().is_empty())
                .ok_or(WordlistError::Malformed { line: line_no })?;

            pairs.push((index, word.to_string()));
        }

        Self::from_pairs(pairs)
    }

    /// Looks up the word for an index.
    pub fn get(&self, index: WordIndex) -> Result<&str, LookupError> {
        self.words
            .get(&index)
            .map(String::as_str)
            .ok_or(LookupError::MissingIndex(index))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `word` is one of the values.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.values().any(|w| w == word)
    }

    /// Iterates entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &str)> {
        self.words.iter().map(|(index, word)| (*index, word.as_str()))
    }

    /// Checks the lookup holds exactly 7776 entries with unique words.
    pub fn validate(&self) -> Result<(), WordlistError> {
        if self.words.len() != WORDLIST_SIZE {
            return Err(WordlistError::WrongSize {
                found: self.words.len(),
                expected: WORDLIST_SIZE,
            });
        }

        let unique: HashSet<&str> = self.words.values().map(String::as_str).collect();
        if unique.len() != WORDLIST_SIZE {
            return Err(WordlistError::DuplicateWords {
                unique: unique.len(),
                expected: WORDLIST_SIZE,
            });
        }

        Ok(())
    }

    /// Returns a BLAKE3 fingerprint of the entries as lowercase hex.
    ///
    /// Two lookups share a fingerprint exactly when they map the same
    /// indices to the same words.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(FINGERPRINT_DOMAIN);
        for (index, word) in &self.words {
            hasher.update(&index.value().to_le_bytes());
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl std::fmt::Debug for WordLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordLookup")
            .field("entries", &self.words.len())
            .finish_non_exhaustive()
    }
}
