//! Rule properties checked over randomly played games.

use othello_engine::{Board, CellState, Game, Location, Turn};
use proptest::prelude::*;

fn location() -> impl Strategy<Value = Location> {
    (0i64..64).prop_map(|offset| Location::from_offset(offset).unwrap())
}

fn cell_state() -> impl Strategy<Value = CellState> {
    prop_oneof![
        Just(CellState::Dark),
        Just(CellState::Light),
        Just(CellState::Empty),
    ]
}

fn total(game: &Game) -> usize {
    game.count(CellState::Dark) + game.count(CellState::Light) + game.count(CellState::Empty)
}

proptest! {
    #[test]
    fn turn_toggles_only_on_success(attempts in prop::collection::vec(location(), 1..120)) {
        let mut game = Game::new();
        for loc in attempts {
            let before = game.clone();
            let predicted = game.would_capture(loc, game.current_turn());

            if game.apply_move(loc) {
                prop_assert!(predicted >= 2);
                prop_assert_eq!(game.current_turn(), !before.current_turn());
                prop_assert_eq!(game.board().diff_count(before.board()), predicted);
            } else {
                prop_assert_eq!(predicted, 0);
                prop_assert_eq!(&game, &before);
            }
            prop_assert_eq!(total(&game), 64);
        }
    }

    #[test]
    fn low_effect_moves_are_never_legal(loc in location(), dark in any::<bool>()) {
        let turn = if dark { Turn::Dark } else { Turn::Light };
        let game = Game::new();
        let changed = game.would_capture(loc, turn);
        prop_assert_eq!(game.is_legal(loc, turn), changed > 1);
        prop_assert_ne!(changed, 1);
    }

    #[test]
    fn duplicate_never_aliases(
        setup in prop::collection::vec((location(), cell_state()), 0..64),
        edits in prop::collection::vec((location(), cell_state()), 1..64),
    ) {
        let mut board = Board::new();
        for (loc, state) in setup {
            board.set(loc, state);
        }
        let snapshot: Vec<CellState> = Location::all().map(|loc| board.get(loc)).collect();

        let mut copy = board.duplicate();
        for (loc, state) in edits {
            copy.set(loc, state);
        }

        let after: Vec<CellState> = Location::all().map(|loc| board.get(loc)).collect();
        prop_assert_eq!(snapshot, after);
    }
}

#[test]
fn out_of_range_offsets_do_not_become_locations() {
    for offset in [-64, -1, 64, 65, i64::MAX] {
        assert_eq!(Location::from_offset(offset), None);
    }
}

#[test]
fn legal_moves_match_is_legal() {
    let mut game = Game::new();
    for _ in 0..20 {
        let moves = game.legal_moves();
        let expected: Vec<Location> = Location::all()
            .filter(|&loc| game.is_legal(loc, game.current_turn()))
            .collect();
        assert_eq!(moves, expected);

        match moves.first() {
            Some(&mv) => assert!(game.apply_move(mv)),
            None => game.pass(),
        }
    }
}

#[test]
fn display_includes_board_and_score() {
    let text = Game::new().to_string();
    assert!(text.starts_with("+---+"));
    assert!(text.ends_with("Light to move. Dark: 2 Light: 2\n"));
}
