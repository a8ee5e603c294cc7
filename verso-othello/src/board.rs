//! The board model: two disjoint per-color bitboards plus their accessors.

use crate::bitboard::Bitboard;
use crate::location::Move;
use crate::utils;
use std::fmt;

/// One of the two disk colors in a game. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Displays as the board glyph for this color: `X` for black, `O` for white.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("X"),
            Color::White => f.write_str("O"),
        }
    }
}

/// A pair of per-color bitboards storing the complete game state.
///
/// Invariant: no square is set in both bitboards. Every constructor and
/// mutator in this crate preserves it; a square is empty iff it is absent
/// from both.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// Starting bitboard for Black: disks at (4,5) and (5,4).
const BLACK_START: Bitboard = Bitboard::from_u64(0x0000000810000000);

/// Starting bitboard for White: disks at (4,4) and (5,5).
const WHITE_START: Bitboard = Bitboard::from_u64(0x0000001008000000);

impl Board {
    /// A board with no disks on it.
    pub fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// The standard starting position: four disks in the central 2x2 square.
    pub fn start_position() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// The bitboard holding `color`'s disks.
    #[inline]
    pub fn bits(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    fn bits_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// A mask of every occupied square.
    #[inline]
    pub fn occupied_mask(&self) -> Bitboard {
        self.black | self.white
    }

    /// A mask of every empty square.
    #[inline]
    pub fn empty_mask(&self) -> Bitboard {
        !self.occupied_mask()
    }

    /// The number of `color` disks on the board.
    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.bits(color).count_occupied()
    }

    /// The color occupying a square, or `None` if it is empty.
    pub fn occupant(&self, mv: Move) -> Option<Color> {
        if self.black.intersects(mv.mask()) {
            Some(Color::Black)
        } else if self.white.intersects(mv.mask()) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Set `mv` in `color`'s bitboard and clear it from the opponent's.
    ///
    /// The single primitive behind both placing a new disk and flipping an
    /// existing one. Callers must ensure `mv` is on the board.
    #[inline]
    pub fn place(&mut self, mv: Move, color: Color) {
        self.place_mask(mv.mask(), color);
    }

    /// [`Board::place`] for a whole mask of squares at once.
    #[inline]
    pub(crate) fn place_mask(&mut self, mask: Bitboard, color: Color) {
        *self.bits_mut(color) |= mask;
        *self.bits_mut(!color) &= !mask;
    }

    /// The material heuristic: `color`'s disk count minus the opponent's.
    ///
    /// The only evaluation function in the system; used both for truly
    /// finished games and as the value of a search-horizon cutoff.
    #[inline]
    pub fn score_disk_difference(&self, color: Color) -> i8 {
        (self.count(color) as i8) - (self.count(!color) as i8)
    }
}

impl fmt::Display for Board {
    /// Render the board as the classic console grid: a `1 2 .. 8` column
    /// header, rows 1..8 top to bottom, `X` for black and `O` for white.
    /// A square claimed by both colors renders as `I`; it is unreachable
    /// unless the disjointness invariant has been broken externally.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .black
            .into_iter()
            .zip(self.white)
            .map(|pair| match pair {
                (false, false) => '.',
                (true, false) => 'X',
                (false, true) => 'O',
                (true, true) => 'I',
            });
        utils::format_grid(cells, f)
    }
}
