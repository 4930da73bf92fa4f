//! Generated passphrase.

use crate::wordlist::WORDLIST_SIZE;

/// An ordered sequence of words drawn from a wordlist.
///
/// Built once per generation and never modified. The `Debug` output
/// hides the words so passphrases do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
}

impl Passphrase {
    pub(crate) fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Returns the words in presentation order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bits of entropy per word for a uniformly chosen index, log2(7776).
    pub fn bits_per_word() -> f64 {
        (WORDLIST_SIZE as f64).log2()
    }

    /// Entropy estimate in bits.
    ///
    /// Holds only when every roll was uniform, which the secure source
    /// provides and keystroke timing does not guarantee.
    pub fn entropy_bits(&self) -> f64 {
        self.words.len() as f64 * Self::bits_per_word()
    }
}

impl std::fmt::Display for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passphrase")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
