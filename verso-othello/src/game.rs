//! Game-level rules: the checked move boundary and end-of-game detection.

use crate::board::{Board, Color};
use crate::bitboard::Bitboard;
use crate::location::Move;
use thiserror::Error;

/// Why a requested move is not playable. All variants are recoverable;
/// the caller simply asks for another move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IllegalMove {
    #[error("row and column must both be between 1 and 8")]
    OffBoard,
    #[error("board position already occupied")]
    Occupied,
    #[error("no disks flipped")]
    NoFlips,
}

impl Board {
    /// The checked move boundary, for moves that originate outside the
    /// library. Validates off-board, occupied, and no-flip conditions in
    /// that order, then applies the move.
    ///
    /// Moves produced by [`Board::legal_moves`] never need this; engines
    /// call [`Board::apply_move`] directly.
    pub fn try_move(&self, mv: Move, color: Color) -> Result<Board, IllegalMove> {
        if !mv.in_bounds() {
            return Err(IllegalMove::OffBoard);
        }
        if self.occupant(mv).is_some() {
            return Err(IllegalMove::Occupied);
        }
        if self.count_flips(mv, color) == 0 {
            return Err(IllegalMove::NoFlips);
        }
        Ok(self.apply_move(mv, color))
    }

    /// Whether the game is over: every square is occupied, or neither
    /// color has a legal move. A position where only one side is stuck is
    /// not terminal; that side passes and play continues.
    pub fn is_terminal(&self) -> bool {
        if self.occupied_mask() == Bitboard::FULL {
            return true;
        }
        self.legal_moves(Color::Black).is_empty() && self.legal_moves(Color::White).is_empty()
    }

    /// The color holding more disks, or `None` for a tie. Only meaningful
    /// once [`Board::is_terminal`] reports the game over.
    pub fn winner(&self) -> Option<Color> {
        match self.score_disk_difference(Color::Black) {
            d if d > 0 => Some(Color::Black),
            d if d < 0 => Some(Color::White),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_move_applies_a_legal_move() {
        let board = Board::start_position();
        let next = board.try_move(Move::new(6, 5), Color::Black).unwrap();
        assert_eq!(next.count(Color::Black), 4);
        assert_eq!(next.count(Color::White), 1);
    }

    #[test]
    fn try_move_rejects_off_board() {
        let board = Board::start_position();
        assert_eq!(
            board.try_move(Move::new(0, 4), Color::Black),
            Err(IllegalMove::OffBoard)
        );
        assert_eq!(
            board.try_move(Move::new(4, 9), Color::Black),
            Err(IllegalMove::OffBoard)
        );
    }

    #[test]
    fn try_move_rejects_occupied() {
        let board = Board::start_position();
        assert_eq!(
            board.try_move(Move::new(4, 4), Color::Black),
            Err(IllegalMove::Occupied)
        );
    }

    #[test]
    fn try_move_rejects_no_flips() {
        let board = Board::start_position();
        assert_eq!(
            board.try_move(Move::new(1, 1), Color::Black),
            Err(IllegalMove::NoFlips)
        );
        // Adjacent to a white disk, but flips nothing.
        assert_eq!(
            board.try_move(Move::new(3, 3), Color::Black),
            Err(IllegalMove::NoFlips)
        );
    }

    #[test]
    fn start_position_is_not_terminal() {
        assert!(!Board::start_position().is_terminal());
    }

    #[test]
    fn full_board_is_terminal() {
        let mut board = Board::empty();
        for row in 1..=8 {
            for col in 1..=8 {
                board.place(Move::new(row, col), Color::Black);
            }
        }
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Color::Black));
    }

    #[test]
    fn double_pass_is_terminal_with_empties_left() {
        // A lone black disk: black has nothing to flip and white has no
        // disk to close a run, so both sides are stuck for good.
        let mut board = Board::empty();
        board.place(Move::new(1, 1), Color::Black);
        assert!(board.legal_moves(Color::Black).is_empty());
        assert!(board.legal_moves(Color::White).is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn one_stuck_side_is_not_terminal() {
        // White cannot move, but black can still play (1,3).
        let mut board = Board::empty();
        board.place(Move::new(1, 1), Color::Black);
        board.place(Move::new(1, 2), Color::White);
        assert!(board.legal_moves(Color::White).is_empty());
        assert!(board.legal_moves(Color::Black).contains(Move::new(1, 3)));
        assert!(!board.is_terminal());
    }

    #[test]
    fn tie_has_no_winner() {
        let mut board = Board::empty();
        board.place(Move::new(1, 1), Color::Black);
        board.place(Move::new(8, 8), Color::White);
        assert_eq!(board.winner(), None);
    }
}
