//! Fixed-format text rendering of a [`Board`].
//!
//! The canvas is 17 lines of 34 bytes. Even lines are rulings (`+` every
//! fourth column, `-` between), odd lines hold cells (`|` every fourth
//! column, the piece glyph two columns to its right). The last byte of every
//! line is `\n`.

use crate::board::Board;
use crate::location::Location;
use crate::EDGE_LENGTH;
use std::fmt;

/// Number of lines in a rendered board.
pub const CANVAS_HEIGHT: usize = EDGE_LENGTH * 2 + 1;

/// Number of bytes per rendered line, including the trailing newline.
pub const CANVAS_WIDTH: usize = EDGE_LENGTH * 4 + 2;

/// Total size of a rendered board in bytes.
pub const CANVAS_LEN: usize = CANVAS_HEIGHT * CANVAS_WIDTH;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Canvas {
    bytes: [[u8; CANVAS_WIDTH]; CANVAS_HEIGHT],
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A blank canvas (all spaces).
    pub const fn new() -> Self {
        Self {
            bytes: [[b' '; CANVAS_WIDTH]; CANVAS_HEIGHT],
        }
    }

    pub fn from_board(board: &Board) -> Self {
        let mut canvas = Self::new();
        canvas.draw(board);
        canvas
    }

    /// Redraw every byte of the canvas from `board`.
    pub fn draw(&mut self, board: &Board) {
        for (i, line) in self.bytes.iter_mut().enumerate() {
            for (j, byte) in line.iter_mut().enumerate() {
                *byte = if j == CANVAS_WIDTH - 1 {
                    b'\n'
                } else if i % 2 == 0 {
                    if j % 4 == 0 {
                        b'+'
                    } else {
                        b'-'
                    }
                } else if j % 4 == 0 {
                    b'|'
                } else if j % 4 == 2 {
                    Location::from_coords(j / 4, i / 2)
                        .map(|loc| board.get(loc).glyph())
                        .unwrap_or(b' ')
                } else {
                    b' '
                };
            }
        }
    }

    /// The byte at `line`, `column`, or None past the edge of the canvas.
    pub fn byte_at(&self, line: usize, column: usize) -> Option<u8> {
        self.bytes.get(line)?.get(column).copied()
    }

    /// The whole canvas as one flat byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_flattened()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every byte written by `draw` is ASCII.
        let text = std::str::from_utf8(self.as_bytes()).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}
