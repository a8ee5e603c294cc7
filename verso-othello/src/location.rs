//! Code for working with [`Move`]s: 1-indexed (row, col) coordinates.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use std::fmt::{self, Display, Formatter};

/// A (row, col) square on the Othello board, both 1-indexed in `1..=8`.
///
/// A `Move` is a plain coordinate pair; whether it is on the board at all,
/// and whether it is legal against a particular position, are checked at
/// the boundaries that care ([`crate::Board::try_move`]), not encoded here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates are within the board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (1..=8).contains(&self.row) && (1..=8).contains(&self.col)
    }

    /// The bit index of this square: `(8 - row) * 8 + (8 - col)`.
    /// Square (1,1) is bit 63; square (8,8) is bit 0.
    #[inline]
    pub fn bit_index(self) -> u8 {
        (8 - self.row) * 8 + (8 - self.col)
    }

    /// Convert from a bit index back to coordinates.
    #[inline]
    pub fn from_bit_index(index: u8) -> Self {
        Self {
            row: 8 - index / EDGE_LENGTH as u8,
            col: 8 - index % EDGE_LENGTH as u8,
        }
    }

    /// A one-hot [`Bitboard`] selecting this square.
    /// Only meaningful for in-bounds moves.
    #[inline]
    pub fn mask(self) -> Bitboard {
        Bitboard::from(1u64 << self.bit_index())
    }

    /// The square one step away along `(dr, dc)`, or `None` if that step
    /// leaves the board.
    #[inline]
    pub fn stepped(self, dr: i8, dc: i8) -> Option<Move> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Move {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Convert this [`Move`] into the "row,col" notation used for human input.
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid move string; expected 'row,col'")]
pub struct ParseMoveError;

/// Build a [`Move`] from "row,col" notation ("3,4").
///
/// Only the shape of the string is validated here; range checking against
/// the board is [`crate::Board::try_move`]'s job, which lets it report an
/// out-of-range pair as [`crate::IllegalMove::OffBoard`] rather than a
/// parse failure, matching the original console diagnostics.
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row_str, col_str) = s.split_once(',').ok_or(ParseMoveError)?;
        let row = row_str.trim().parse().map_err(|_| ParseMoveError)?;
        let col = col_str.trim().parse().map_err(|_| ParseMoveError)?;
        Ok(Self { row, col })
    }
}
