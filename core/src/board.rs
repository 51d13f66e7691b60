use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Hidden ground truth: where the mines are and how many surround every other cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<HiddenCell>,
    mine_count: CellCount,
}

impl Board {
    /// Derives adjacency counts from a mine mask shaped `(rows, cols)`.
    ///
    /// Rejects masks outside `1..=255` in either dimension and masks with no free cell.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidDifficulty);
        }

        let board = Self::from_mine_mask_unchecked(mine_mask);
        if board.mine_count >= board.total_cells() {
            return Err(GameError::InvalidDifficulty);
        }
        Ok(board)
    }

    /// Caller guarantees both dimensions fit in a `Coord`.
    pub(crate) fn from_mine_mask_unchecked(mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                HiddenCell::Mine
            } else {
                let coords = (row as Coord, col as Coord);
                let adjacent = mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count();
                HiddenCell::Count(adjacent as u8)
            }
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Self { cells, mine_count }
    }

    /// Builds a board of `size` `(rows, cols)` with mines at the given coordinates.
    ///
    /// Repeated coordinates collapse into one mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDifficulty);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    /// Accepts a stored hidden grid only if every count agrees with a recount of its neighbors.
    pub(crate) fn from_cells(cells: Array2<HiddenCell>) -> Option<Self> {
        let (rows, cols) = cells.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return None;
        }

        let mine_mask = cells.map(|cell| cell.is_mine());
        let board = Self::from_mine_mask_unchecked(&mine_mask);
        (board.cells == cells).then_some(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(cols, rows, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Recounts mines around `coords` from scratch, ignoring the stored value.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn cells(&self) -> &Array2<HiddenCell> {
        &self.cells
    }

    /// Coordinates of every mine, in row-major order.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for Board {
    type Output = HiddenCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
