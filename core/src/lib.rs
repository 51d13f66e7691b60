#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod snapshot;
mod tile;
mod types;

/// The three difficulty parameters of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Requires a non-empty board with at least one cell left free of mines.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.mines >= self.total_cells() {
            Err(GameError::InvalidDifficulty)
        } else {
            Ok(())
        }
    }

    /// Board size as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Named presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(30, 16, 99),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// Revealed cells cannot carry a flag.
    Blocked,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    HitMine,
    /// The cell is flagged and has to be unflagged first.
    Blocked,
}

impl RevealOutcome {
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}
