use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Both grids and the difficulty parameters, enough to resume a game exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub hidden: Array2<HiddenCell>,
    pub visible: Array2<VisibleCell>,
}

impl Snapshot {
    pub fn from_game(game: &GameState) -> Self {
        Self {
            config: game.config(),
            hidden: game.board().cells().clone(),
            visible: game.visible().clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.check_board().map(|_| ())
    }

    pub fn into_game(self) -> Result<GameState> {
        let board = self.check_board()?;
        Ok(GameState::from_parts(self.config, board, self.visible))
    }

    fn check_board(&self) -> Result<Board> {
        let corrupt = |reason: &str| {
            log::warn!("Rejecting snapshot: {}", reason);
            GameError::CorruptSnapshot
        };

        self.config
            .validate()
            .map_err(|_| corrupt("invalid difficulty"))?;

        let expected = (usize::from(self.config.height), usize::from(self.config.width));
        if self.hidden.dim() != expected || self.visible.dim() != expected {
            return Err(corrupt("grid shape does not match difficulty"));
        }

        let board = Board::from_cells(self.hidden.clone())
            .ok_or_else(|| corrupt("stored counts disagree with mine positions"))?;
        if board.mine_count() != self.config.mines {
            return Err(corrupt("mine total does not match difficulty"));
        }

        let consistent = self
            .visible
            .iter()
            .zip(self.hidden.iter())
            .all(|(&shown, &actual)| shown.is_consistent_with(actual));
        if !consistent {
            return Err(corrupt("visible cell contradicts hidden cell"));
        }

        Ok(board)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    /// Encodes the game as a JSON snapshot.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.snapshot()).map_err(|err| {
            log::warn!("Failed to encode snapshot: {}", err);
            GameError::CorruptSnapshot
        })
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_slice(bytes).map_err(|err| {
            log::warn!("Failed to decode snapshot: {}", err);
            GameError::CorruptSnapshot
        })?;
        snapshot.into_game()
    }

    /// Replaces this game with the one in `bytes`. On error the current game is kept as is.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<()> {
        *self = Self::deserialize(bytes)?;
        Ok(())
    }
}
