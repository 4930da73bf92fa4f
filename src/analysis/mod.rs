//! Roll distribution auditing.
//!
//! Draws a batch of rolls from a source and tests the face counts for
//! uniformity. These are sanity checks, not cryptographic proofs.

mod statistics;

pub use statistics::RollHistogram;

use crate::entropy::{source_label, EntropyError, EntropySource};

/// Draws `rolls` rolls from `source` into a histogram.
pub fn audit<S>(source: &mut S, rolls: u64) -> Result<RollHistogram, EntropyError>
where
    S: EntropySource + ?Sized,
{
    let mut histogram = RollHistogram::new();
    for _ in 0..rolls {
        histogram.record(source.roll()?);
    }

    tracing::info!(
        rolls,
        strategy = source_label(&*source),
        chi_square = histogram.chi_square(),
        p_value = histogram.p_value().unwrap_or(f64::NAN),
        "Roll distribution audited"
    );

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedSource;

    #[test]
    fn test_audit_counts_rolls() {
        let mut source = ScriptedSource::from_values((0..60).map(|i| i % 6 + 1));

        let histogram = audit(&mut source, 60).unwrap();

        assert_eq!(histogram.total(), 60);
        assert_eq!(histogram.counts(), &[10; 6]);
    }

    #[test]
    fn test_audit_propagates_errors() {
        let mut source = ScriptedSource::from_values([1, 2]);
        assert!(matches!(
            audit(&mut source, 3),
            Err(EntropyError::Exhausted(2))
        ));
    }
}
