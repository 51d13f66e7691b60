use serde::{Deserialize, Serialize};

/// Ground truth for one cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiddenCell {
    Mine,
    /// Number of mines among the Moore neighbors, `0..=8`. Zero is a blank cell.
    Count(u8),
}

impl HiddenCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Blank cells are the only ones that propagate a reveal.
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Count(0))
    }

    /// The visible state this cell takes once revealed.
    pub const fn revealed(self) -> VisibleCell {
        match self {
            Self::Mine => VisibleCell::RevealedMine,
            Self::Count(0) => VisibleCell::RevealedBlank,
            Self::Count(n) => VisibleCell::RevealedNumber(n),
        }
    }
}

impl Default for HiddenCell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Unrevealed,
    Flagged,
    RevealedBlank,
    RevealedNumber(u8),
    RevealedMine,
}

impl VisibleCell {
    /// Unrevealed and flagged cells both count as "not yet explored".
    pub const fn is_unexplored(self) -> bool {
        matches!(self, Self::Unrevealed | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        !self.is_unexplored()
    }

    /// Whether this visible state may sit on top of `hidden`.
    pub const fn is_consistent_with(self, hidden: HiddenCell) -> bool {
        match (self, hidden) {
            (Self::Unrevealed | Self::Flagged, _) => true,
            (Self::RevealedMine, HiddenCell::Mine) => true,
            (Self::RevealedBlank, HiddenCell::Count(0)) => true,
            (Self::RevealedNumber(shown), HiddenCell::Count(actual)) => shown != 0 && shown == actual,
            _ => false,
        }
    }
}

impl Default for VisibleCell {
    fn default() -> Self {
        Self::Unrevealed
    }
}
