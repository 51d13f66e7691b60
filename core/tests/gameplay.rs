use minesweep_core::*;

fn all_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    (0..size.0).flat_map(move |row| (0..size.1).map(move |col| (row, col)))
}

fn neighbors(size: Coord2, coords: Coord2) -> impl Iterator<Item = Coord2> {
    NeighborIter::new(coords, size)
}

#[test]
fn generated_boards_hold_their_invariants() {
    for seed in 0..50 {
        let board = generate(12, 7, 20, seed).unwrap();
        let size = board.size();

        assert_eq!(size, (7, 12));
        assert_eq!(all_coords(size).filter(|&c| board.contains_mine(c)).count(), 20);

        for coords in all_coords(size) {
            if let HiddenCell::Count(n) = board[coords] {
                let live = neighbors(size, coords)
                    .filter(|&pos| board[pos] == HiddenCell::Mine)
                    .count();
                assert_eq!(usize::from(n), live, "seed {seed} at {coords:?}");
            }
        }
    }
}

#[test]
fn flood_fill_opens_whole_blank_region_and_its_border() {
    for seed in 0..50 {
        let mut game = GameState::generate(GameConfig::new(16, 16, 30).unwrap(), seed).unwrap();
        let size = game.size();
        let Some(start) = all_coords(size).find(|&c| game.hidden_at(c).is_blank()) else {
            continue;
        };

        assert_eq!(game.reveal(start).unwrap(), RevealOutcome::Revealed);

        for coords in all_coords(size) {
            match game.cell_at(coords) {
                VisibleCell::RevealedBlank => {
                    for pos in neighbors(size, coords) {
                        assert!(game.cell_at(pos).is_revealed(), "seed {seed}: {pos:?} left closed");
                    }
                }
                VisibleCell::RevealedMine => panic!("seed {seed}: flood fill opened a mine"),
                _ => {}
            }
        }
    }
}

#[test]
fn revealing_every_safe_cell_wins() {
    let mut game = GameState::generate(Difficulty::Beginner.config(), 11).unwrap();
    let size = game.size();

    for coords in all_coords(size) {
        if !game.hidden_at(coords).is_mine() {
            if game.cell_at(coords) == VisibleCell::Unrevealed {
                assert!(!game.won());
            }
            assert_eq!(game.reveal(coords).unwrap(), RevealOutcome::Revealed);
        }
    }

    assert!(game.won());
    assert!(!game.lost());
    assert!(game.done());
    assert_eq!(game.unrevealed_count(), 10);
}

#[test]
fn single_centre_mine_scenario() {
    let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
    for coords in all_coords((3, 3)) {
        let expected = if coords == (1, 1) {
            HiddenCell::Mine
        } else {
            HiddenCell::Count(1)
        };
        assert_eq!(board[coords], expected);
    }

    let mut game = GameState::new(board);
    assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(game.cell_at((0, 0)), VisibleCell::RevealedNumber(1));
    assert_eq!(game.cell_at((0, 1)), VisibleCell::Unrevealed);

    assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::HitMine);
    assert!(game.lost());
}

#[test]
fn empty_two_by_two_is_won_in_one_move() {
    let mut game = GameState::generate(GameConfig::new(2, 2, 0).unwrap(), 5).unwrap();

    game.reveal((0, 1)).unwrap();

    for coords in all_coords((2, 2)) {
        assert_eq!(game.cell_at(coords), VisibleCell::RevealedBlank);
    }
    assert!(game.won());
}

#[test]
fn flag_then_reveal_is_blocked() {
    let mut game = GameState::generate(Difficulty::Beginner.config(), 3).unwrap();

    assert_eq!(game.toggle_flag((4, 4)).unwrap(), FlagOutcome::Flagged);
    assert_eq!(game.reveal((4, 4)).unwrap(), RevealOutcome::Blocked);
    assert_eq!(game.cell_at((4, 4)), VisibleCell::Flagged);
}

#[test]
fn saved_game_resumes_identically() {
    let mut game = GameState::generate(Difficulty::Intermediate.config(), 99).unwrap();
    game.toggle_flag((0, 0)).unwrap();
    let safe = all_coords(game.size())
        .find(|&c| !game.hidden_at(c).is_mine() && c != (0, 0))
        .unwrap();
    game.reveal(safe).unwrap();

    let bytes = game.serialize().unwrap();
    let mut resumed = GameState::generate(Difficulty::Beginner.config(), 1).unwrap();
    resumed.restore(&bytes).unwrap();

    assert_eq!(resumed, game);
    assert_eq!(resumed.config(), Difficulty::Intermediate.config());
    assert_eq!(resumed.serialize().unwrap(), bytes);
}

#[test]
fn loss_then_disclosure() {
    let mut game = GameState::generate(Difficulty::Beginner.config(), 8).unwrap();
    let mine = game.board().mine_coords().next().unwrap();

    assert_eq!(game.reveal(mine).unwrap(), RevealOutcome::HitMine);
    game.reveal_all_mines();

    let shown = all_coords(game.size())
        .filter(|&c| game.cell_at(c) == VisibleCell::RevealedMine)
        .count();
    assert_eq!(shown, 10);
    assert!(game.lost());
    assert!(!game.won());
}
