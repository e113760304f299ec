//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as a column and a row in `[0, 8)`.
///
/// The fields are private: the constructors below are the only way to build
/// one, so every `Location` in existence is on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    // Row first so that the derived ordering is row-major.
    row: u8,
    col: u8,
}

/// One of the eight compass directions a capture run can follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (column, row) step taken by one move in this direction.
    /// Rows grow downwards, so north is a negative row step.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Convert from column (`x`) and row (`y`) coordinates.
    /// Returns None if either coordinate is off the board.
    #[inline]
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x < EDGE_LENGTH && y < EDGE_LENGTH {
            Some(Self {
                row: y as u8,
                col: x as u8,
            })
        } else {
            None
        }
    }

    /// Convert from a row-major offset (`row * 8 + column`).
    /// Negative offsets and offsets of 64 or more return None.
    #[inline]
    pub fn from_offset(offset: i64) -> Option<Self> {
        if (0..NUM_SPACES as i64).contains(&offset) {
            let offset = offset as usize;
            Self::from_coords(offset % EDGE_LENGTH, offset / EDGE_LENGTH)
        } else {
            None
        }
    }

    /// Get the column and row coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.col as usize, self.row as usize)
    }

    /// Convert into a row-major offset.
    #[inline]
    pub fn to_offset(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    /// The neighbouring location one step away in `direction`,
    /// or None if that step leaves the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.col as i8 + dx;
        let y = self.row as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::from_coords(x as usize, y as usize)
    }

    /// Iterate over every location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).map(|offset| Location {
            row: (offset / EDGE_LENGTH) as u8,
            col: (offset % EDGE_LENGTH) as u8,
        })
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(col, row - 1).ok_or(ParseLocationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0).map(Location::to_offset), Some(0));
        assert_eq!(Location::from_coords(7, 7).map(Location::to_offset), Some(63));
        assert_eq!(Location::from_coords(3, 2).map(Location::to_offset), Some(19));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_from_offset() {
        assert_eq!(Location::from_offset(19), Location::from_coords(3, 2));
        assert_eq!(Location::from_offset(63), Location::from_coords(7, 7));
        assert_eq!(Location::from_offset(64), None);
        assert_eq!(Location::from_offset(-1), None);
    }

    #[test]
    fn location_step_stops_at_edges() {
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::NorthEast), None);
        assert_eq!(
            corner.step(Direction::SouthEast),
            Location::from_coords(1, 1)
        );

        let far = Location::from_coords(7, 7).unwrap();
        assert_eq!(far.step(Direction::East), None);
        assert_eq!(far.step(Direction::South), None);
        assert_eq!(far.step(Direction::NorthWest), Location::from_coords(6, 6));
    }

    #[test]
    fn location_all_is_row_major() {
        let offsets: Vec<usize> = Location::all().map(Location::to_offset).collect();
        assert_eq!(offsets, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::from_coords(0, 0).unwrap()));
        assert_eq!(Location::from_str("h8"), Ok(Location::from_coords(7, 7).unwrap()));
        assert_eq!(Location::from_str("D7"), Ok(Location::from_coords(3, 6).unwrap()));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::from_coords(7, 7).unwrap().to_string(), "H8");
        assert_eq!(Location::from_coords(0, 0).unwrap().to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }
}
