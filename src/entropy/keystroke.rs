//! Die rolls from the timing jitter between key presses.
//!
//! Each roll times one key press against a monotonic clock and keeps
//! only the three least significant decimal digits of the nanosecond
//! duration. Those digits are dominated by human timing jitter rather
//! than typing cadence.
//!
//! This is a best-effort source. It is NOT a cryptographic entropy
//! source and is weaker than [`SecureRandom`](super::SecureRandom).

use super::{DieRoll, EntropyError, EntropySource, EntropyStrategy};
use std::time::Instant;

/// Width of the low-order window taken from the duration (three digits).
pub const TIMING_WINDOW: u128 = 1000;

/// A blocking source of discrete key-press events.
pub trait KeyEventSource {
    /// Blocks until exactly one key press arrives.
    fn wait_for_key(&mut self) -> Result<(), EntropyError>;
}

/// A monotonic clock with nanosecond readings.
pub trait MonotonicClock {
    /// Returns the current reading in nanoseconds from an arbitrary origin.
    fn now_nanos(&mut self) -> u128;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_nanos(&mut self) -> u128 {
        self.origin.elapsed().as_nanos()
    }
}

/// Folds a duration in nanoseconds onto a die face.
///
/// Takes `delta mod 1000` as a fraction of 1000 and maps it with
/// `floor(fraction * 6) + 1`. The integer form `window * 6 / 1000` is the
/// same floor without going through floating point.
pub fn fold_delta(delta_nanos: u128) -> DieRoll {
    let window = delta_nanos % TIMING_WINDOW;
    let bucket = window * u128::from(DieRoll::FACES) / TIMING_WINDOW;
    DieRoll::from_bucket(bucket as u8)
}

/// Computes the elapsed nanoseconds between two readings.
///
/// A reading that goes backwards is clamped to zero and reported as
/// `None` in the second field so the caller can count the anomaly.
pub fn elapsed_nanos(start: u128, stop: u128) -> (u128, Option<u128>) {
    match stop.checked_sub(start) {
        Some(delta) => (delta, None),
        None => (0, Some(start - stop)),
    }
}

/// Keystroke-timing entropy source.
pub struct KeystrokeTiming<K, C = SystemClock> {
    keys: K,
    clock: C,
    /// Negative durations clamped to zero.
    anomalies: u64,
}

impl<K: KeyEventSource> KeystrokeTiming<K, SystemClock> {
    /// Creates a source timing `keys` against the system monotonic clock.
    pub fn new(keys: K) -> Self {
        Self::with_clock(keys, SystemClock::new())
    }
}

impl<K: KeyEventSource, C: MonotonicClock> KeystrokeTiming<K, C> {
    /// Creates a source with an explicit clock.
    pub fn with_clock(keys: K, clock: C) -> Self {
        Self {
            keys,
            clock,
            anomalies: 0,
        }
    }

    /// Returns how many non-monotonic readings were clamped.
    pub fn anomalies(&self) -> u64 {
        self.anomalies
    }
}

impl<K: KeyEventSource, C: MonotonicClock> EntropySource for KeystrokeTiming<K, C> {
    fn roll(&mut self) -> Result<DieRoll, EntropyError> {
        let start = self.clock.now_nanos();
        self.keys.wait_for_key()?;
        let stop = self.clock.now_nanos();

        let (delta, regression) = elapsed_nanos(start, stop);
        if let Some(backwards) = regression {
            self.anomalies += 1;
            tracing::warn!(
                backwards_ns = backwards as u64,
                anomalies = self.anomalies,
                "Clock went backwards during key wait, clamping duration to zero"
            );
        }

        tracing::trace!("Keystroke timed");
        Ok(fold_delta(delta))
    }

    fn strategy(&self) -> Option<EntropyStrategy> {
        Some(EntropyStrategy::KeystrokeTiming)
    }
}
