//! `othello-engine` implements the rules of Othello on a plain 8x8 grid.
//!
//! The crate is layered the same way a caller uses it:
//!
//!  - [`Location`] is a validated board coordinate. Every read or write of a
//!    [`Board`] goes through one, so out-of-range access cannot be expressed.
//!  - [`Board`] is a fixed grid of [`CellState`]s with no rules knowledge.
//!  - [`Game`] owns the live board and the turn, and implements legality,
//!    capture resolution, move application and scoring.
//!  - [`Canvas`] draws a board into the fixed 17x34 text grid used by readers.

pub mod test_utils;

mod board;
mod game;
mod location;
mod render;

pub use board::*;
pub use game::*;
pub use location::*;
pub use render::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
