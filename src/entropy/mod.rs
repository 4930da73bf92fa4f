//! Die-roll entropy sources.
//!
//! Every source implements [`EntropySource`], producing one die roll per
//! call. Two strategies exist and one is chosen at construction time:
//!
//! - [`SecureRandom`]: uniform draws from an owned CSPRNG
//! - [`KeystrokeTiming`]: the low-order digits of the time between key presses
//!
//! The passphrase assembler only sees the trait.

mod keystroke;
mod roll;
mod secure;

pub use keystroke::{
    elapsed_nanos, fold_delta, KeyEventSource, KeystrokeTiming, MonotonicClock, SystemClock,
    TIMING_WINDOW,
};
pub use roll::DieRoll;
pub use secure::SecureRandom;

use crate::config::ConfigError;
use crate::terminal::TerminalKeys;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while producing a roll.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("failed to read key event: {0}")]
    KeySource(#[from] std::io::Error),
    #[error("interrupted while waiting for a key press")]
    Interrupted,
    #[error("scripted source exhausted after {0} rolls")]
    Exhausted(usize),
}

/// Which strategy produces the rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyStrategy {
    /// Cryptographically secure generator.
    SecureRandom,
    /// Timing between user key presses.
    #[default]
    KeystrokeTiming,
}

impl EntropyStrategy {
    /// Picks the strategy from the single `--urandom` style flag.
    pub fn from_secure_flag(secure: bool) -> Self {
        if secure {
            Self::SecureRandom
        } else {
            Self::KeystrokeTiming
        }
    }

    /// Returns true if the strategy waits on the user.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::KeystrokeTiming)
    }

    /// Returns the configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SecureRandom => "secure-random",
            Self::KeystrokeTiming => "keystroke-timing",
        }
    }
}

impl std::fmt::Display for EntropyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntropyStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "secure-random" | "urandom" => Ok(Self::SecureRandom),
            "keystroke-timing" | "keystroke" => Ok(Self::KeystrokeTiming),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Trait for die-roll sources.
///
/// Each call must be statistically independent of the others and
/// uniform over `1..=6`.
pub trait EntropySource {
    /// Produces one die roll, blocking if the strategy needs user input.
    fn roll(&mut self) -> Result<DieRoll, EntropyError>;

    /// Returns the strategy this source implements, or `None` for a
    /// replayed sequence that is not a strategy at all.
    fn strategy(&self) -> Option<EntropyStrategy>;
}

/// Names a source for log output.
pub(crate) fn source_label<S: EntropySource + ?Sized>(source: &S) -> &'static str {
    source.strategy().map_or("scripted", EntropyStrategy::as_str)
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn roll(&mut self) -> Result<DieRoll, EntropyError> {
        (**self).roll()
    }

    fn strategy(&self) -> Option<EntropyStrategy> {
        (**self).strategy()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn roll(&mut self) -> Result<DieRoll, EntropyError> {
        (**self).roll()
    }

    fn strategy(&self) -> Option<EntropyStrategy> {
        (**self).strategy()
    }
}

/// Builds the source for a strategy.
///
/// Keystroke timing reads key presses from the controlling terminal,
/// which must already be in raw mode.
pub fn from_strategy(strategy: EntropyStrategy) -> Box<dyn EntropySource> {
    match strategy {
        EntropyStrategy::SecureRandom => Box::new(SecureRandom::from_os_entropy()),
        EntropyStrategy::KeystrokeTiming => Box::new(KeystrokeTiming::new(TerminalKeys::new())),
    }
}

/// Replays a fixed sequence of rolls.
///
/// For tests and demonstrations only; it provides no entropy.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    rolls: VecDeque<DieRoll>,
    served: usize,
}

impl ScriptedSource {
    /// Creates a source from face values. Values outside `1..=6` are skipped.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: values.into_iter().filter_map(DieRoll::new).collect(),
            served: 0,
        }
    }

    /// Returns the number of rolls left.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl EntropySource for ScriptedSource {
    fn roll(&mut self) -> Result<DieRoll, EntropyError> {
        let roll = self
            .rolls
            .pop_front()
            .ok_or(EntropyError::Exhausted(self.served))?;
        self.served += 1;
        Ok(roll)
    }

    fn strategy(&self) -> Option<EntropyStrategy> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_flag() {
        assert_eq!(
            EntropyStrategy::from_secure_flag(true),
            EntropyStrategy::SecureRandom
        );
        assert_eq!(
            EntropyStrategy::from_secure_flag(false),
            EntropyStrategy::KeystrokeTiming
        );
        assert!(EntropyStrategy::default().is_interactive());
    }

    #[test]
    fn test_strategy_parse_roundtrip() {
        for strategy in [EntropyStrategy::SecureRandom, EntropyStrategy::KeystrokeTiming] {
            assert_eq!(strategy.to_string().parse::<EntropyStrategy>().unwrap(), strategy);
        }
        assert!(matches!(
            "coin-flip".parse::<EntropyStrategy>(),
            Err(ConfigError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_secure_source_built_from_strategy() {
        let mut source = from_strategy(EntropyStrategy::SecureRandom);
        assert_eq!(source.strategy(), Some(EntropyStrategy::SecureRandom));
        assert_eq!(source_label(&source), "secure-random");
        assert!(source.roll().is_ok());
    }

    #[test]
    fn test_scripted_source_exhausts() {
        let mut source = ScriptedSource::from_values([3, 9, 4]);
        assert_eq!(source.remaining(), 2);

        assert_eq!(source.roll().unwrap().value(), 3);
        assert_eq!(source.roll().unwrap().value(), 4);
        assert!(matches!(source.roll(), Err(EntropyError::Exhausted(2))));
    }

    #[test]
    fn test_scripted_source_claims_no_strategy() {
        let source = ScriptedSource::from_values([6; 5]);

        assert_eq!(source.strategy(), None);
        assert_eq!(source_label(&source), "scripted");
    }
}
