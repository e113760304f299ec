//! The Othello grid: cell contents only, no rules.

use crate::location::Location;
use crate::render::Canvas;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The occupant of a single board cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    Dark,
    Light,
    Empty,
}

/// One of the two colours that can be on the move.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Dark,
    Light,
}

impl std::ops::Not for Turn {
    type Output = Self;

    /// Gets the other colour.
    fn not(self) -> Self {
        match self {
            Turn::Dark => Turn::Light,
            Turn::Light => Turn::Dark,
        }
    }
}

impl From<Turn> for CellState {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Dark => CellState::Dark,
            Turn::Light => CellState::Light,
        }
    }
}

impl CellState {
    /// The glyph drawn for this cell in a rendered board.
    #[inline]
    pub fn glyph(self) -> u8 {
        match self {
            CellState::Dark => b'@',
            CellState::Light => b'O',
            CellState::Empty => b' ',
        }
    }
}

/// A fixed 8x8 grid of [`CellState`]s.
///
/// Not `Copy`: working copies are made explicitly with [`Board::duplicate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[CellState; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with every cell empty.
    pub const fn new() -> Self {
        Self {
            cells: [[CellState::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> CellState {
        let (x, y) = loc.to_coords();
        self.cells[y][x]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, state: CellState) {
        let (x, y) = loc.to_coords();
        self.cells[y][x] = state;
    }

    /// An independent copy of this board.
    #[inline]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Count the cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Count the cells whose contents differ between `self` and `other`.
    pub fn diff_count(&self, other: &Board) -> usize {
        self.cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Canvas::from_board(self), f)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", glyph)]
    BadGlyph { glyph: char },
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
}

/// Parse a board from 64 glyphs in row-major order: `@` dark, `O` light,
/// `.` or `-` empty. Whitespace is skipped so boards can be laid out as a grid.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let states = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|glyph| match glyph {
                '@' => Ok(CellState::Dark),
                'O' => Ok(CellState::Light),
                '.' | '-' => Ok(CellState::Empty),
                _ => Err(ParseBoardError::BadGlyph { glyph }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if states.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: states.len(),
            });
        }

        let mut board = Board::new();
        for (loc, state) in Location::all().zip(states) {
            board.set(loc, state);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: usize, y: usize) -> Location {
        Location::from_coords(x, y).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(CellState::Empty), 64);
        assert!(Location::all().all(|loc| board.get(loc) == CellState::Empty));
    }

    #[test]
    fn set_then_get() {
        let mut board = Board::new();
        board.set(at(2, 5), CellState::Light);
        assert_eq!(board.get(at(2, 5)), CellState::Light);
        assert_eq!(board.get(at(5, 2)), CellState::Empty);
        assert_eq!(board.count(CellState::Light), 1);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut original = Board::new();
        original.set(at(0, 0), CellState::Dark);

        let mut copy = original.duplicate();
        copy.set(at(0, 0), CellState::Light);
        copy.set(at(7, 7), CellState::Dark);

        assert_eq!(original.get(at(0, 0)), CellState::Dark);
        assert_eq!(original.get(at(7, 7)), CellState::Empty);
        assert_eq!(original.diff_count(&copy), 2);
    }

    #[test]
    fn turn_toggles() {
        assert_eq!(!Turn::Dark, Turn::Light);
        assert_eq!(!!Turn::Light, Turn::Light);
        assert_eq!(CellState::from(Turn::Dark), CellState::Dark);
    }

    #[test]
    fn parse_board() {
        let board: Board = "
            @.......
            ........
            ........
            ...O@...
            ...@O...
            ........
            ........
            .......O"
            .parse()
            .unwrap();
        assert_eq!(board.get(at(0, 0)), CellState::Dark);
        assert_eq!(board.get(at(7, 7)), CellState::Light);
        assert_eq!(board.get(at(3, 3)), CellState::Light);
        assert_eq!(board.count(CellState::Dark), 3);
        assert_eq!(board.count(CellState::Light), 3);
    }

    #[test]
    fn parse_board_fail() {
        assert_eq!(
            "@@".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            "X".repeat(64).parse::<Board>(),
            Err(ParseBoardError::BadGlyph { glyph: 'X' })
        );
    }
}
