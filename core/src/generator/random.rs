use ndarray::Array2;

use super::*;

/// Places mines by rejection sampling: draw a uniform cell, keep it if it is still free.
///
/// Fine for the densities people actually play; `GameConfig` guarantees at least one free cell, so the loop ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let size = config.size();
        log::debug!(
            "Generating {}x{} board with {} mines, seed {}",
            config.width,
            config.height,
            config.mines,
            self.seed
        );

        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut draws: u64 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..size.0), rng.random_range(0..size.1));
            draws += 1;
            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::trace!("Placed {} mines in {} draws", mines_placed, draws);
        Board::from_mine_mask_unchecked(&mines)
    }
}
