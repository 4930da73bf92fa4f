//! Passphrase assembly from die rolls.

use super::Passphrase;
use crate::entropy::{source_label, DieRoll, EntropyError, EntropySource};
use crate::wordlist::{LookupError, WordIndex, WordLookup, ROLLS_PER_WORD};
use thiserror::Error;

/// Errors that can occur while generating a passphrase.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("a passphrase needs at least one word")]
    InvalidWordCount,
    #[error("{0} words need more rolls than can be counted")]
    TooManyWords(usize),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Receives the number of rolls still to come.
///
/// Called before every roll, so a keystroke-timing display can show the
/// count while the source waits for the next key.
pub trait Progress {
    /// Reports the rolls remaining, including the one about to happen.
    fn rolls_remaining(&mut self, remaining: usize);
}

impl Progress for () {
    fn rolls_remaining(&mut self, _remaining: usize) {}
}

/// Generates a passphrase of `num_words` words.
pub fn generate<S>(
    num_words: usize,
    lookup: &WordLookup,
    source: &mut S,
) -> Result<Passphrase, GenerateError>
where
    S: EntropySource + ?Sized,
{
    generate_with_progress(num_words, lookup, source, &mut ())
}

/// Generates a passphrase, reporting the remaining roll count to `progress`.
///
/// Each word consumes five rolls, combined by [`WordIndex::from_rolls`]
/// and looked up in `lookup`. A word is only appended once all of its
/// rolls and its lookup succeed; any failure aborts the whole passphrase.
pub fn generate_with_progress<S, P>(
    num_words: usize,
    lookup: &WordLookup,
    source: &mut S,
    progress: &mut P,
) -> Result<Passphrase, GenerateError>
where
    S: EntropySource + ?Sized,
    P: Progress + ?Sized,
{
    if num_words == 0 {
        return Err(GenerateError::InvalidWordCount);
    }

    let mut remaining = num_words
        .checked_mul(ROLLS_PER_WORD)
        .ok_or(GenerateError::TooManyWords(num_words))?;
    let mut words = Vec::new();

    for position in 0..num_words {
        let mut rolls = [DieRoll::ONE; ROLLS_PER_WORD];
        for slot in rolls.iter_mut() {
            progress.rolls_remaining(remaining);
            *slot = source.roll()?;
            remaining -= 1;
        }

        let index = WordIndex::from_rolls(&rolls);
        let word = lookup.get(index)?;
        tracing::debug!(position, "Word selected");

        words.push(word.to_string());
    }

    tracing::debug!(
        words = words.len(),
        strategy = source_label(&*source),
        "Passphrase assembled"
    );

    Ok(Passphrase::new(words))
}
