//! Exhaustive fixed-depth negamax over the game tree.

use rayon::prelude::*;
use verso_othello::{Board, Color, Move};

/// The best disk-difference margin `color` can force from this position
/// within `depth` plies, assuming both sides play optimally against the
/// same heuristic.
///
/// Full-width search: every legal move at every level is expanded until
/// the depth limit or a terminal position. Siblings at each level are
/// evaluated in parallel; each task owns its own board copy, and the
/// results merge through a max fold, which is commutative and associative,
/// so the value is independent of scheduling. A side with no moves passes,
/// and the search continues one ply shallower for the opponent.
pub fn negamax(board: Board, color: Color, depth: u32) -> i8 {
    if depth == 0 || board.is_terminal() {
        return board.score_disk_difference(color);
    }

    let moves: Vec<Move> = board.legal_moves(color).collect();
    if moves.is_empty() {
        return -negamax(board, !color, depth - 1);
    }

    moves
        .into_par_iter()
        .map(|mv| -negamax(board.apply_move(mv, color), !color, depth - 1))
        .max()
        .unwrap_or(i8::MIN)
}
