//! Implements game-level Othello logic: legality, captures, turns and scoring.
//!
//! [`Game`] is the single owner of the live [`Board`]. Legality is decided by
//! playing the move out on a scoped working copy and counting how many cells
//! changed; the copy never outlives the check.

use crate::board::{Board, CellState, Turn};
use crate::location::{Direction, Location};
use crate::render::Canvas;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, info, instrument};

/// Why a placement was refused. The live game is untouched in both cases.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveError {
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },
    #[display(fmt = "{} does not capture any disks", location)]
    NoCapture { location: Location },
}

/// The complete state of one Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Turn,
    first_turn: Turn,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The colour that opens a game unless configured otherwise.
    pub const DEFAULT_FIRST_TURN: Turn = Turn::Light;

    /// A game in the starting position, with Light to move.
    pub fn new() -> Self {
        Self::with_first_turn(Self::DEFAULT_FIRST_TURN)
    }

    /// A game in the starting position with `first_turn` to move.
    /// [`Game::reset`] returns to this same colour.
    pub fn with_first_turn(first_turn: Turn) -> Self {
        Self {
            board: Self::starting_board(),
            turn: first_turn,
            first_turn,
        }
    }

    /// The four-disk opening: dark on the main diagonal of the centre square,
    /// light on the anti-diagonal.
    pub fn starting_board() -> Board {
        const CENTER: usize = EDGE_LENGTH / 2;
        let mut board = Board::new();
        let placements = [
            (CENTER, CENTER, CellState::Dark),
            (CENTER - 1, CENTER - 1, CellState::Dark),
            (CENTER - 1, CENTER, CellState::Light),
            (CENTER, CENTER - 1, CellState::Light),
        ];
        for (x, y, state) in placements {
            if let Some(loc) = Location::from_coords(x, y) {
                board.set(loc, state);
            }
        }
        board
    }

    /// Read-only view of the live board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    /// Force the colour to move. No legality is implied.
    pub fn set_turn(&mut self, turn: Turn) {
        if turn != self.turn {
            info!(from = %self.turn, to = %turn, "turn overridden");
        }
        self.turn = turn;
    }

    /// Hand the move to the other colour without placing a disk.
    pub fn pass(&mut self) {
        self.turn = !self.turn;
    }

    /// Count the cells on the live board holding `state`.
    #[inline]
    pub fn count(&self, state: CellState) -> usize {
        self.board.count(state)
    }

    /// Restore the starting position and the configured first colour.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Self::starting_board();
        self.turn = self.first_turn;
        info!(turn = %self.turn, "game reset");
    }

    /// How many cells placing `turn` at `loc` would change, counting the
    /// placed disk itself. Returns 0 when the move is not legal: the cell is
    /// occupied, or nothing would be flipped.
    pub fn would_capture(&self, loc: Location, turn: Turn) -> usize {
        if self.board.get(loc) != CellState::Empty {
            return 0;
        }

        let mut working = self.board.duplicate();
        working.set(loc, turn.into());
        resolve_captures(&mut working, loc, turn);

        match working.diff_count(&self.board) {
            changed if changed <= 1 => 0,
            changed => changed,
        }
    }

    #[inline]
    pub fn is_legal(&self, loc: Location, turn: Turn) -> bool {
        self.would_capture(loc, turn) > 0
    }

    /// Place a disk for the colour to move, flip every bracketed run and hand
    /// the turn over. Returns the number of cells changed.
    #[instrument(skip(self), fields(turn = %self.turn, location = %loc))]
    pub fn play(&mut self, loc: Location) -> Result<usize, MoveError> {
        let turn = self.turn;

        if self.board.get(loc) != CellState::Empty {
            debug!("target cell occupied");
            return Err(MoveError::Occupied { location: loc });
        }
        let changed = self.would_capture(loc, turn);
        if changed == 0 {
            debug!("no disks captured");
            return Err(MoveError::NoCapture { location: loc });
        }

        self.board.set(loc, turn.into());
        let flipped = resolve_captures(&mut self.board, loc, turn);
        self.turn = !turn;

        info!(flipped, next = %self.turn, "move applied");
        Ok(changed)
    }

    /// [`Game::play`] reduced to whether the move was accepted.
    #[inline]
    pub fn apply_move(&mut self, loc: Location) -> bool {
        self.play(loc).is_ok()
    }

    /// Every location where the colour to move may legally play, row-major.
    pub fn legal_moves(&self) -> Vec<Location> {
        Location::all()
            .filter(|&loc| self.is_legal(loc, self.turn))
            .collect()
    }

    /// Draw the live board.
    pub fn render(&self) -> Canvas {
        Canvas::from_board(&self.board)
    }
}

/// Flip every run of opponent disks that a `turn` disk at `loc` brackets,
/// returning how many disks were flipped. `loc` itself is never written.
///
/// Each direction is scanned on its own: a run only starts on an opposing
/// neighbour, and it is flipped only if it ends on a `turn` disk. Runs that
/// reach an empty cell or the edge of the board flip nothing.
pub fn resolve_captures(board: &mut Board, loc: Location, turn: Turn) -> usize {
    let own = CellState::from(turn);
    let opponent = CellState::from(!turn);
    let mut flipped = 0;

    for direction in Direction::ALL {
        let mut run = 0;
        let mut cursor = loc.step(direction);

        while let Some(current) = cursor {
            match board.get(current) {
                state if state == opponent => run += 1,
                state if state == own => {
                    // Walk the run again from the placed cell, flipping as we go.
                    let mut captured = loc.step(direction);
                    for _ in 0..run {
                        if let Some(cell) = captured {
                            board.set(cell, own);
                            captured = cell.step(direction);
                        }
                    }
                    flipped += run;
                    break;
                }
                _ => break,
            }
            cursor = current.step(direction);
        }
    }

    if flipped > 0 {
        debug!(flipped, location = %loc, "captures resolved");
    }
    flipped
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)?;
        writeln!(
            f,
            "{} to move. Dark: {} Light: {}",
            self.turn,
            self.count(CellState::Dark),
            self.count(CellState::Light)
        )
    }
}
