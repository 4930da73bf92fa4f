//! Crate-level error type.

use crate::config::ConfigError;
use crate::entropy::EntropyError;
use crate::passphrase::GenerateError;
use crate::wordlist::WordlistError;
use thiserror::Error;

/// Any failure surfaced to the command-line driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("wordlist error: {0}")]
    Wordlist(#[from] WordlistError),
    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the user interrupted a key wait.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Error::Entropy(EntropyError::Interrupted)
                | Error::Generate(GenerateError::Entropy(EntropyError::Interrupted))
        )
    }
}
