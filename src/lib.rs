//! Diceware Passphrase Generation Library
//!
//! Generates passphrases with the Diceware method: five simulated die
//! rolls select each word from a fixed 7776-entry wordlist.
//!
//! # Architecture
//!
//! ```text
//! entropy (die rolls) → passphrase (assembly) ← wordlist (lookup)
//!        ↓
//!     analysis (distribution audit)
//! ```
//!
//! Rolls come from one of two sources, chosen once at construction:
//!
//! - **Secure random**: a ChaCha20 CSPRNG seeded from the OS
//! - **Keystroke timing**: the low-order digits of the nanoseconds between
//!   key presses. Best-effort only, with no cryptographic claims.
//!
//! # Example
//!
//! ```
//! use diceware_roller::{
//!     entropy::SecureRandom,
//!     passphrase::generate,
//!     wordlist::{WordLookup, WORDLIST_SIZE},
//! };
//!
//! let lookup = WordLookup::from_words((0..WORDLIST_SIZE).map(|n| format!("word{n}")));
//! let mut source = SecureRandom::from_os_entropy();
//!
//! let passphrase = generate(6, &lookup, &mut source).unwrap();
//! assert_eq!(passphrase.len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod entropy;
mod error;
pub mod passphrase;
pub mod terminal;
pub mod wordlist;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root
pub use analysis::RollHistogram;
pub use config::{ConfigError, FileConfig, GeneratorConfig};
pub use entropy::{DieRoll, EntropySource, EntropyStrategy, KeystrokeTiming, SecureRandom};
pub use error::Error;
pub use passphrase::{generate, GenerateError, Passphrase};
pub use wordlist::{WordIndex, WordLookup, WordlistName, WordlistProvider};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
