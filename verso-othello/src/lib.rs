//! `verso-othello` is an Othello library built around a two-bitboard
//! representation of the game.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw bit-set type underlying everything else.
//!  - [`Board`] implements board state, move generation, and the fast,
//!    unchecked move application used by engines. Unchecked operations may
//!    produce inconsistent state if their contracts are not manually upheld.
//!  - [`Board::try_move`] is the safe, checked entry point for moves that
//!    originate outside the library (for example, from a human player).

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod moves;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use moves::*;

/// The number of squares on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on an Othello board.
pub const NUM_SPACES: usize = 64;
