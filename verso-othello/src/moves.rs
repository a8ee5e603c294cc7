//! Move generation: candidate squares, flip simulation, and legal moves.
//!
//! Candidates come from shifting the opponent's bitboard along each of the
//! eight directions; legality and flip counts come from walking outward
//! from a square one direction at a time.

use crate::bitboard::Bitboard;
use crate::board::{Board, Color};
use crate::location::Move;

/// One of the eight king-move unit vectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

/// The eight scan directions: right, left, up, down, up-left, up-right,
/// down-right, down-left.
pub static DIRECTIONS: [Direction; 8] = [
    Direction { dr: 0, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: -1, dc: -1 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: 1, dc: 1 },
    Direction { dr: 1, dc: -1 },
];

impl Direction {
    /// How far this direction moves a square's bit index (positive values
    /// shift towards the LSB).
    #[inline]
    fn bit_offset(self) -> i8 {
        self.dr * 8 + self.dc
    }

    /// The column that shifting along this direction wraps into, and which
    /// must therefore be masked off: column 1 when moving right, column 8
    /// when moving left. Row wraparound falls off the u64 on its own.
    #[inline]
    fn wrap_mask(self) -> Bitboard {
        if self.dc > 0 {
            Bitboard::COL_1
        } else if self.dc < 0 {
            Bitboard::COL_8
        } else {
            Bitboard::EMPTY
        }
    }
}

/// A set of moves backed by a [`Bitboard`] mask.
///
/// Iteration yields moves in ascending bit-index order, which under this
/// crate's square numbering is row 8 down to 1, column 8 down to 1 within
/// each row. Root-level tie-breaking relies on this order.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub struct MoveSet(Bitboard);

impl MoveSet {
    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The number of moves in the set.
    #[inline]
    pub fn num_moves(self) -> u8 {
        self.0.count_occupied()
    }

    /// Returns whether `mv` is in the set.
    #[inline]
    pub fn contains(self, mv: Move) -> bool {
        self.0.intersects(mv.mask())
    }

    /// The underlying square mask.
    #[inline]
    pub fn mask(self) -> Bitboard {
        self.0
    }
}

impl Iterator for MoveSet {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.first_index() as u8;
        self.0 ^= Bitboard::from(1u64 << index);
        Some(Move::from_bit_index(index))
    }
}

impl Board {
    /// The empty squares adjacent to at least one of the opponent's disks:
    /// a superset of the legal moves for `color`, cheap to compute by
    /// shifting the opponent's bitboard one step along every direction.
    pub fn candidate_squares(&self, color: Color) -> Bitboard {
        let opponent = self.bits(!color);
        let mut neighbors = Bitboard::EMPTY;
        for dir in &DIRECTIONS {
            neighbors |= opponent.shifted(dir.bit_offset()) & !dir.wrap_mask();
        }
        neighbors & self.empty_mask()
    }

    /// The opponent disks that placing `color` at `mv` would flip along
    /// `dir`: a run of one or more opponent disks ending on a `color`
    /// disk. Empty if the run hits an empty square or the board edge
    /// before closing.
    fn flip_span(&self, mv: Move, dir: Direction, color: Color) -> Bitboard {
        let mut span = Bitboard::EMPTY;
        let mut probe = mv.stepped(dir.dr, dir.dc);

        while let Some(square) = probe {
            match self.occupant(square) {
                Some(c) if c == !color => span |= square.mask(),
                Some(_) => return span,
                None => break,
            }
            probe = square.stepped(dir.dr, dir.dc);
        }
        Bitboard::EMPTY
    }

    /// How many opponent disks placing `color` at `mv` would flip, summed
    /// over all eight directions. A move on an empty square is legal iff
    /// this is positive.
    pub fn count_flips(&self, mv: Move, color: Color) -> u32 {
        DIRECTIONS
            .iter()
            .map(|&dir| self.flip_span(mv, dir, color).count_occupied() as u32)
            .sum()
    }

    /// Every legal move for `color`: the candidate squares that flip at
    /// least one disk.
    pub fn legal_moves(&self, color: Color) -> MoveSet {
        let mut legal = Bitboard::EMPTY;
        for mv in MoveSet(self.candidate_squares(color)) {
            if self.count_flips(mv, color) > 0 {
                legal |= mv.mask();
            }
        }
        MoveSet(legal)
    }

    /// Place `color` at `mv` and flip every closed run of opponent disks.
    ///
    /// Unchecked: callers must have validated legality first (the moves
    /// yielded by [`Board::legal_moves`] are legal by construction). Called
    /// on an illegal move this silently places a disk that flips nothing.
    #[must_use]
    pub fn apply_move(&self, mv: Move, color: Color) -> Board {
        let mut mask = mv.mask();
        for dir in &DIRECTIONS {
            mask |= self.flip_span(mv, *dir, color);
        }

        let mut next = *self;
        next.place_mask(mask, color);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-derive the legal moves square by square, without the shift-based
    /// candidate prefilter.
    fn brute_force_legal_moves(board: &Board, color: Color) -> Vec<Move> {
        let mut legal = Vec::new();
        for row in (1..=8).rev() {
            for col in (1..=8).rev() {
                let mv = Move::new(row, col);
                if board.occupant(mv).is_none() && board.count_flips(mv, color) > 0 {
                    legal.push(mv);
                }
            }
        }
        legal
    }

    /// Drive a game forward by always playing the first legal move in scan
    /// order, alternating colors and passing when stuck.
    fn play_first_legal(plies: usize) -> Board {
        let mut board = Board::start_position();
        let mut color = Color::Black;
        for _ in 0..plies {
            if let Some(mv) = board.legal_moves(color).next() {
                board = board.apply_move(mv, color);
            }
            color = !color;
        }
        board
    }

    #[test]
    fn opening_moves() {
        let board = Board::start_position();
        let legal: Vec<Move> = board.legal_moves(Color::Black).collect();
        assert_eq!(
            legal,
            vec![
                Move::new(6, 5),
                Move::new(5, 6),
                Move::new(4, 3),
                Move::new(3, 4),
            ]
        );
        assert_eq!(board.legal_moves(Color::Black).num_moves(), 4);
    }

    #[test]
    fn opening_moves_each_flip_one_disk() {
        let board = Board::start_position();
        for mv in board.legal_moves(Color::Black) {
            assert_eq!(board.count_flips(mv, Color::Black), 1);
        }
    }

    #[test]
    fn candidates_are_a_superset_of_legal_moves() {
        for plies in [0, 3, 10, 25] {
            let board = play_first_legal(plies);
            for color in [Color::Black, Color::White] {
                let candidates = board.candidate_squares(color);
                for mv in board.legal_moves(color) {
                    assert!(candidates.intersects(mv.mask()));
                }
            }
        }
    }

    #[test]
    fn legal_moves_agree_with_brute_force() {
        for plies in [0, 1, 5, 12, 30, 50] {
            let board = play_first_legal(plies);
            for color in [Color::Black, Color::White] {
                let from_generator: Vec<Move> = board.legal_moves(color).collect();
                assert_eq!(from_generator, brute_force_legal_moves(&board, color));
            }
        }
    }

    #[test]
    fn flips_follow_the_count_invariant() {
        for plies in [0, 2, 7, 20, 40] {
            let board = play_first_legal(plies);
            for color in [Color::Black, Color::White] {
                for mv in board.legal_moves(color) {
                    let flips = board.count_flips(mv, color) as i16;
                    let next = board.apply_move(mv, color);

                    assert_eq!(
                        next.count(color) as i16,
                        board.count(color) as i16 + 1 + flips
                    );
                    assert_eq!(
                        next.count(!color) as i16,
                        board.count(!color) as i16 - flips
                    );
                    assert_eq!(
                        next.occupied_mask().count_occupied(),
                        board.occupied_mask().count_occupied() + 1
                    );
                }
            }
        }
    }

    #[test]
    fn reachable_boards_stay_disjoint() {
        for plies in 0..60 {
            let board = play_first_legal(plies);
            assert!((board.bits(Color::Black) & board.bits(Color::White)).is_empty());
        }
    }

    #[test]
    fn walk_off_the_edge_flips_nothing() {
        // Black and white in a line against the top edge: walking up from
        // (3,1) runs off the board without closing.
        let mut board = Board::empty();
        board.place(Move::new(1, 1), Color::White);
        board.place(Move::new(2, 1), Color::White);
        assert_eq!(board.count_flips(Move::new(3, 1), Color::Black), 0);
        assert!(!board.legal_moves(Color::Black).contains(Move::new(3, 1)));
    }

    #[test]
    fn unclosed_run_flips_nothing() {
        // . B . : walking right from (4,3) over the black disk hits an
        // empty square before any white disk closes the run.
        let mut board = Board::empty();
        board.place(Move::new(4, 4), Color::Black);
        assert_eq!(board.count_flips(Move::new(4, 3), Color::White), 0);
    }

    #[test]
    fn adjacent_own_disk_flips_nothing() {
        let mut board = Board::empty();
        board.place(Move::new(4, 4), Color::White);
        assert_eq!(board.count_flips(Move::new(4, 3), Color::White), 0);
    }

    #[test]
    fn move_set_iterates_high_rows_first() {
        let mut set = MoveSet(Move::new(2, 3).mask() | Move::new(7, 1).mask());
        assert_eq!(set.next(), Some(Move::new(7, 1)));
        assert_eq!(set.next(), Some(Move::new(2, 3)));
        assert_eq!(set.next(), None);
    }
}
