use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid difficulty: need 1..=255 rows and columns and fewer mines than cells")]
    InvalidDifficulty,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Snapshot is corrupt or inconsistent")]
    CorruptSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;
