//! Die-face distribution statistics.
//!
//! A chi-square goodness-of-fit test against the uniform distribution.
//! Passing it is a sanity check on a source, not a proof of entropy.

use crate::entropy::DieRoll;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Degrees of freedom for six faces.
const DEGREES_OF_FREEDOM: f64 = (DieRoll::FACES - 1) as f64;

/// Counts of each die face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollHistogram {
    counts: [u64; DieRoll::FACES as usize],
}

impl RollHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a histogram from a sequence of rolls.
    pub fn from_rolls(rolls: impl IntoIterator<Item = DieRoll>) -> Self {
        let mut histogram = Self::new();
        for roll in rolls {
            histogram.record(roll);
        }
        histogram
    }

    /// Records one roll.
    #[inline]
    pub fn record(&mut self, roll: DieRoll) {
        self.counts[usize::from(roll.value() - 1)] += 1;
    }

    /// Returns how often `face` was rolled.
    #[inline]
    pub fn count(&self, face: DieRoll) -> u64 {
        self.counts[usize::from(face.value() - 1)]
    }

    /// Returns the counts for faces one through six.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns the number of rolls recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Computes the chi-square statistic against a uniform die.
    pub fn chi_square(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        let expected = total as f64 / f64::from(DieRoll::FACES);
        self.counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Probability of a statistic at least this large from a fair die.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn p_value(&self) -> Option<f64> {
        if self.total() == 0 {
            return None;
        }
        let dist = ChiSquared::new(DEGREES_OF_FREEDOM).ok()?;
        Some(dist.sf(self.chi_square()))
    }

    /// Returns true if uniformity is not rejected at significance `alpha`.
    pub fn looks_uniform(&self, alpha: f64) -> bool {
        self.p_value().is_some_and(|p| p >= alpha)
    }
}
