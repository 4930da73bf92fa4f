//! Word index derived from five die rolls.
//!
//! # Digit order
//!
//! Rolls are accumulated least-significant-first: the first roll is the
//! ones digit, the second the tens digit, and so on. The result is
//! compared numerically with the keys printed in the wordlist files, so
//! every list is used as published. Changing this order silently changes
//! which word a roll sequence selects without breaking any structural
//! check, so it is fixed here and nowhere else.

use crate::entropy::DieRoll;

/// Die rolls per word.
pub const ROLLS_PER_WORD: usize = 5;

/// Entries in a complete wordlist (6^5).
pub const WORDLIST_SIZE: usize = 7776;

/// A wordlist key: five decimal digits, each in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordIndex(u32);

impl WordIndex {
    /// Smallest index (all ones).
    pub const MIN: WordIndex = WordIndex(11111);

    /// Largest index (all sixes).
    pub const MAX: WordIndex = WordIndex(66666);

    /// Creates an index from its numeric form, or `None` if any digit is
    /// outside `1..=6` or the value is not five digits long.
    pub fn new(value: u32) -> Option<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return None;
        }

        let mut rest = value;
        for _ in 0..ROLLS_PER_WORD {
            let digit = (rest % 10) as u8;
            DieRoll::new(digit)?;
            rest /= 10;
        }

        Some(Self(value))
    }

    /// Combines five rolls, first roll in the ones digit.
    pub fn from_rolls(rolls: &[DieRoll; ROLLS_PER_WORD]) -> Self {
        let value = rolls
            .iter()
            .zip(0u32..)
            .map(|(roll, position)| u32::from(roll.value()) * 10u32.pow(position))
            .sum();
        Self(value)
    }

    /// Recovers the roll sequence that produces this index.
    pub fn rolls(self) -> [DieRoll; ROLLS_PER_WORD] {
        let mut rolls = [DieRoll::ONE; ROLLS_PER_WORD];
        let mut rest = self.0;
        for slot in rolls.iter_mut() {
            *slot = DieRoll::from_bucket((rest % 10) as u8 - 1);
            rest /= 10;
        }
        rolls
    }

    /// Returns the numeric form.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Iterates all 7776 indices in ascending numeric order.
    pub fn all() -> impl Iterator<Item = WordIndex> {
        (0..WORDLIST_SIZE as u32).map(|ordinal| {
            let mut rest = ordinal;
            let mut value = 0;
            for position in 0..ROLLS_PER_WORD as u32 {
                value += (rest % 6 + 1) * 10u32.pow(position);
                rest /= 6;
            }
            WordIndex(value)
        })
    }
}

impl std::fmt::Display for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
