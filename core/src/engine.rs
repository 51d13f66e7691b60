use alloc::vec;
use ndarray::Array2;

use crate::*;

/// A game in progress: the hidden board plus what the player has uncovered so far.
///
/// Every mutation goes through [`reveal`](Self::reveal), [`toggle_flag`](Self::toggle_flag),
/// [`reveal_all_mines`](Self::reveal_all_mines) or [`restore`](Self::restore).
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    visible: Array2<VisibleCell>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        let config = board.config();
        Self {
            config,
            visible: Array2::default(board.size().to_nd_index()),
            board,
        }
    }

    /// Starts a fresh game on a random board.
    pub fn generate(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(RandomBoardGenerator::new(seed).generate(config)))
    }

    /// Caller guarantees the parts are mutually consistent.
    pub(crate) fn from_parts(config: GameConfig, board: Board, visible: Array2<VisibleCell>) -> Self {
        Self {
            config,
            board,
            visible,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn visible(&self) -> &Array2<VisibleCell> {
        &self.visible
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    /// Panics if `coords` is out of bounds; see [`cell`](Self::cell) for the checked form.
    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.visible[coords.to_nd_index()]
    }

    /// Panics if `coords` is out of bounds; see [`hidden`](Self::hidden) for the checked form.
    pub fn hidden_at(&self, coords: Coord2) -> HiddenCell {
        self.board[coords]
    }

    pub fn cell(&self, coords: Coord2) -> Result<VisibleCell> {
        self.board.validate_coords(coords).map(|coords| self.cell_at(coords))
    }

    pub fn hidden(&self, coords: Coord2) -> Result<HiddenCell> {
        self.board.validate_coords(coords).map(|coords| self.hidden_at(coords))
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_visible(|cell| cell == VisibleCell::Flagged)
    }

    /// Cells still unrevealed, flagged ones included.
    pub fn unrevealed_count(&self) -> CellCount {
        self.count_visible(VisibleCell::is_unexplored)
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flag_count() as isize)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use VisibleCell::*;

        let coords = self.board.validate_coords(coords)?;
        let cell = self.visible[coords.to_nd_index()];

        Ok(match cell {
            Flagged => RevealOutcome::Blocked,
            RevealedMine => RevealOutcome::HitMine,
            RevealedBlank | RevealedNumber(_) => RevealOutcome::Revealed,
            Unrevealed if self.board.contains_mine(coords) => {
                log::debug!("Mine hit at {:?}", coords);
                self.visible[coords.to_nd_index()] = RevealedMine;
                RevealOutcome::HitMine
            }
            Unrevealed => {
                let opened = self.flood_reveal(coords);
                log::trace!("Reveal at {:?} opened {} cells", coords, opened);
                RevealOutcome::Revealed
            }
        })
    }

    /// Opens `start` and, while the opened cell is blank, every unrevealed neighbor.
    ///
    /// The visible grid doubles as the visited set: only `Unrevealed` cells are opened, and each one at most once.
    fn flood_reveal(&mut self, start: Coord2) -> usize {
        let mut pending = vec![start];
        let mut opened = 0;

        while let Some(coords) = pending.pop() {
            if self.visible[coords.to_nd_index()] != VisibleCell::Unrevealed {
                continue;
            }

            let hidden = self.board[coords];
            self.visible[coords.to_nd_index()] = hidden.revealed();
            opened += 1;

            if hidden.is_blank() {
                pending.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| self.visible[pos.to_nd_index()] == VisibleCell::Unrevealed),
                );
            }
        }

        opened
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use VisibleCell::*;

        let coords = self.board.validate_coords(coords)?;
        let cell = &mut self.visible[coords.to_nd_index()];

        Ok(match *cell {
            Unrevealed => {
                *cell = Flagged;
                FlagOutcome::Flagged
            }
            Flagged => {
                *cell = Unrevealed;
                FlagOutcome::Unflagged
            }
            RevealedBlank | RevealedNumber(_) | RevealedMine => FlagOutcome::Blocked,
        })
    }

    /// Won once the unrevealed cells, flags included, number exactly the mines.
    ///
    /// Flags are not checked against the real mine positions. A lost game never counts as won.
    pub fn won(&self) -> bool {
        !self.lost() && self.unrevealed_count() == self.config.mines
    }

    pub fn lost(&self) -> bool {
        self.visible.iter().any(|&cell| cell == VisibleCell::RevealedMine)
    }

    pub fn done(&self) -> bool {
        self.won() || self.lost()
    }

    /// Shows every mine, overriding flags. Meant for after a loss.
    pub fn reveal_all_mines(&mut self) {
        for coords in self.board.mine_coords() {
            self.visible[coords.to_nd_index()] = VisibleCell::RevealedMine;
        }
    }

    fn count_visible(&self, pred: impl Fn(VisibleCell) -> bool) -> CellCount {
        self.visible.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }
}
