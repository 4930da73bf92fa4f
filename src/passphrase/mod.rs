//! Passphrase assembly.
//!
//! Drives an [`EntropySource`](crate::entropy::EntropySource) five times
//! per word, folds each group of rolls into a
//! [`WordIndex`](crate::wordlist::WordIndex) and joins the selected words.

mod assembler;
mod phrase;

pub use assembler::{generate, generate_with_progress, GenerateError, Progress};
pub use phrase::Passphrase;
