use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Validates the difficulty triple and builds a random board from `seed`.
pub fn generate(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Board> {
    let config = GameConfig::new(width, height, mines)?;
    Ok(RandomBoardGenerator::new(seed).generate(config))
}
