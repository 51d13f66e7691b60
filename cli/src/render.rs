use std::fmt::Write as _;

use minesweep_core::{GameState, VisibleCell};

fn symbol(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Unrevealed => '*',
        VisibleCell::Flagged => 'F',
        VisibleCell::RevealedBlank => '_',
        VisibleCell::RevealedNumber(n) => char::from_digit(n.into(), 10).unwrap_or('?'),
        VisibleCell::RevealedMine => 'X',
    }
}

/// Draws the visible grid with row labels down the side and column labels on top.
pub fn board(game: &GameState) -> String {
    let (rows, cols) = game.size();
    let label_width = rows.max(cols).saturating_sub(1).to_string().len();

    let mut out = String::new();
    let _ = write!(out, "{:label_width$}", "");
    for col in 0..cols {
        let _ = write!(out, " {col:>label_width$}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>label_width$}");
        for col in 0..cols {
            let _ = write!(out, " {:>label_width$}", symbol(game.cell_at((row, col))));
        }
        out.push('\n');
    }
    out
}

pub fn status(game: &GameState) -> String {
    format!("Mines left: {}", game.mines_left())
}
