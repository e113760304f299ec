//! "Perft" move-tree test: count the number of leaves at a given depth.
//! Useful for checking the legality and capture rules against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::new(), depth, false)
}

fn leaves_below(game: &Game, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = game.clone();
        next.pass();
        return leaves_below(&next, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply_move(mv);
            leaves_below(&next, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
