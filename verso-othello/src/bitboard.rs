//! The raw bit-set type underlying board state and move generation.
//!
//! Under the hood, all operations work on a u64. By convention, bit index
//! `(8 - row) * 8 + (8 - col)` holds the square at 1-indexed `(row, col)`,
//! so the MSB is the upper-left of the board and iteration from the MSB
//! down visits squares in row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard with no squares set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A bitboard with every square set.
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    /// All of the squares in column 1.
    pub const COL_1: Bitboard = Bitboard(0x8080808080808080);

    /// All of the squares in column 8.
    pub const COL_8: Bitboard = Bitboard(0x0101010101010101);

    /// Const-context constructor. Non-const code can use `From<u64>`.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Count the number of occupied squares in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty squares in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if no squares are set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if any square of `mask` is set in this bitboard.
    #[inline]
    pub fn intersects(self, mask: Bitboard) -> bool {
        self.0 & mask.0 != 0
    }

    /// The index of the lowest set bit. 64 if the bitboard is empty.
    #[inline]
    pub fn first_index(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Shift every square by `offset` bit positions: towards the LSB when
    /// positive, towards the MSB when negative. Bits shifted past either
    /// end are discarded; row wraparound is the caller's concern.
    #[inline]
    pub fn shifted(self, offset: i8) -> Bitboard {
        if offset >= 0 {
            Bitboard(self.0 >> offset)
        } else {
            Bitboard(self.0 << -offset)
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = self.bitboard.intersects(bitmask);
        self.remaining -= 1;

        Some(bit)
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
