//! Die rolls from a cryptographically secure generator.
//!
//! Each source owns its generator. The default generator is ChaCha20
//! seeded once from the OS entropy source, so every roll in a run comes
//! from the same stream without any process-wide shared state.

use super::{DieRoll, EntropyError, EntropySource, EntropyStrategy};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};

/// Secure-random entropy source.
///
/// Non-blocking and free of side effects: a roll is a uniform draw
/// from `1..=6` using the owned generator.
pub struct SecureRandom<R = ChaCha20Rng> {
    /// The owned CSPRNG.
    rng: R,
    /// Rolls produced so far.
    rolls: u64,
}

impl SecureRandom<ChaCha20Rng> {
    /// Creates a source backed by ChaCha20 seeded from the OS entropy source.
    ///
    /// This is the recommended way to build a secure source.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::new(ChaCha20Rng::from_seed(seed))
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    /// Creates a source around an injected generator.
    pub fn new(rng: R) -> Self {
        Self { rng, rolls: 0 }
    }

    /// Returns the number of rolls produced.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }
}

impl<R: RngCore + CryptoRng> EntropySource for SecureRandom<R> {
    fn roll(&mut self) -> Result<DieRoll, EntropyError> {
        // gen_range rejects out-of-zone samples, so the six buckets are unbiased
        let bucket: u8 = self.rng.gen_range(0..DieRoll::FACES);
        self.rolls += 1;
        Ok(DieRoll::from_bucket(bucket))
    }

    fn strategy(&self) -> Option<EntropyStrategy> {
        Some(EntropyStrategy::SecureRandom)
    }
}

impl<R> std::fmt::Debug for SecureRandom<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRandom")
            .field("rolls", &self.rolls)
            .finish_non_exhaustive()
    }
}
