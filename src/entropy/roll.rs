//! Die roll value type.

/// A single six-sided die roll in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieRoll(u8);

impl DieRoll {
    /// Number of faces on the simulated die.
    pub const FACES: u8 = 6;

    /// The lowest face.
    pub const ONE: DieRoll = DieRoll(1);

    /// The highest face.
    pub const SIX: DieRoll = DieRoll(6);

    /// Creates a roll from a face value, or `None` outside `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::FACES).contains(&value).then_some(Self(value))
    }

    /// Maps a zero-based bucket in `0..6` onto a face.
    ///
    /// Callers are expected to produce buckets below [`DieRoll::FACES`];
    /// anything larger wraps rather than leaving the valid range.
    #[inline]
    pub(crate) fn from_bucket(bucket: u8) -> Self {
        Self(bucket % Self::FACES + 1)
    }

    /// Returns the face value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
