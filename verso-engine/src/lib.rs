//! `verso-engine` is an automated Othello player: exhaustive fixed-depth
//! negamax search over [`verso_othello`] boards, parallel across sibling
//! moves.
//!
//! The root scan runs sequentially so that ties between equally-scored
//! moves always resolve to the first move in scan order (row 8 down to 1,
//! column 8 down to 1), no matter how many threads the subtree searches
//! use underneath.

pub mod search;

use log::debug;
use verso_othello::{Board, Color, Move};

/// Select the best move for `color`, searching `depth` plies ahead.
///
/// Returns `None` when `color` has no legal move; whether that means a
/// pass or the end of the game is the caller's call. A candidate replaces
/// the incumbent only on a strictly better score, so the result is
/// deterministic under any parallel schedule.
pub fn choose_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    let mut best: Option<(Move, i8)> = None;

    for mv in board.legal_moves(color) {
        let child = board.apply_move(mv, color);
        let score = -search::negamax(child, !color, depth.saturating_sub(1));

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    match best {
        Some((mv, score)) => {
            debug!("{color} plays {mv} (score {score}, depth {depth})");
            Some(mv)
        }
        None => {
            debug!("{color} has no legal moves");
            None
        }
    }
}

/// Run one full computer turn: choose a move for `color` and, if one
/// exists, apply it to `board`. Returns the move played.
pub fn play_turn(board: &mut Board, color: Color, depth: u32) -> Option<Move> {
    let mv = choose_move(board, color, depth)?;
    *board = board.apply_move(mv, color);
    Some(mv)
}
