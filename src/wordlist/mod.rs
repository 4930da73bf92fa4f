//! Wordlists and word indices.
//!
//! This module turns five die rolls into a [`WordIndex`] and maps indices
//! to words through an immutable [`WordLookup`]. Named lists are read from
//! disk by the [`WordlistProvider`].

mod index;
mod lookup;
mod provider;

pub use index::{WordIndex, ROLLS_PER_WORD, WORDLIST_SIZE};
pub use lookup::WordLookup;
pub use provider::{WordlistName, WordlistProvider};

use std::path::PathBuf;
use thiserror::Error;

/// A computed index had no word.
///
/// Signals an incomplete wordlist; any passphrase built from it would
/// be suspect, so generation stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("word index {0} is missing from the wordlist")]
    MissingIndex(WordIndex),
}

/// Errors that can occur while loading or validating a wordlist.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read wordlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: entry has no word")]
    Malformed { line: usize },
    #[error("line {line}: invalid word index {key}")]
    InvalidIndex { line: usize, key: String },
    #[error("word index {0} appears more than once")]
    DuplicateIndex(WordIndex),
    #[error("wordlist has {found} entries instead of {expected}")]
    WrongSize { found: usize, expected: usize },
    #[error("wordlist has {unique} unique words instead of {expected}")]
    DuplicateWords { unique: usize, expected: usize },
    #[error("wordlist {name} fingerprint {found} does not match pinned {expected}")]
    FingerprintMismatch {
        name: WordlistName,
        expected: String,
        found: String,
    },
}
