//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises legality, placement and undo together: every leaf is reached by
//! putting and taken back by undoing on one shared board.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;

pub fn run_perft(depth: u64) -> u64 {
    let mut board = Board::new();
    let leaves = leaves_below(&mut board, depth, false);
    debug_assert_eq!(board, Board::new());
    leaves
}

fn leaves_below(board: &mut Board, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_positions();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        board.pass();
        let leaves = leaves_below(board, depth - 1, true);
        board.undo();
        return leaves;
    }

    all_moves
        .into_iter()
        .map(|mv| {
            board.put(mv);
            let leaves = leaves_below(board, depth - 1, false);
            board.undo();
            leaves
        })
        .sum()
}

