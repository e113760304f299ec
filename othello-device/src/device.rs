//! The character-device model wrapped around one [`Game`].

use crate::command::{turn_from_code, Command, Response};
use crate::config::DeviceConfig;
use crate::error::DeviceError;
use othello_engine::{Canvas, CellState, Game, Location, Turn, CANVAS_LEN};
use tracing::{debug, instrument, warn};

/// Disk counts reported by [`Command::GetInfo`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Info {
    pub dark: usize,
    pub light: usize,
}

/// Owns the game, the canvas readers see, and the write cursor.
#[derive(Debug)]
pub struct Device {
    game: Game,
    canvas: Canvas,
    // Position of the next written byte on the board, in row-major cells.
    // Survives across writes until a newline or NUL.
    write_cursor: i64,
}

impl Default for Device {
    fn default() -> Self {
        Self::with_game(Game::new())
    }
}

impl Device {
    pub fn new(config: &DeviceConfig) -> Self {
        Self::with_game(Game::with_first_turn(config.first_turn))
    }

    pub fn with_game(game: Game) -> Self {
        let canvas = game.render();
        Self {
            game,
            canvas,
            write_cursor: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Copy rendered board bytes starting at `offset` into `buf`.
    /// The canvas is redrawn first, so every read sees the live board.
    /// Returns the number of bytes copied, 0 once `offset` reaches the end.
    pub fn read(&mut self, buf: &mut [u8], offset: usize) -> usize {
        if offset >= CANVAS_LEN {
            return 0;
        }
        self.canvas.draw(self.game.board());

        let source = &self.canvas.as_bytes()[offset..];
        let len = source.len().min(buf.len());
        buf[..len].copy_from_slice(&source[..len]);
        len
    }

    /// Positional write. Each byte advances the write cursor by one cell; a
    /// `@` or `O` matching the colour to move attempts a move at the cursor.
    /// A newline or NUL rewinds the cursor and ends the buffer.
    /// The whole buffer is always reported as consumed.
    #[instrument(skip(self, bytes), fields(len = bytes.len(), cursor = self.write_cursor))]
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        for &byte in bytes {
            let glyph_turn = match byte {
                b'@' => Some(Turn::Dark),
                b'O' => Some(Turn::Light),
                b'\n' | b'\0' => {
                    self.write_cursor = 0;
                    break;
                }
                _ => None,
            };

            if glyph_turn == Some(self.game.current_turn()) {
                if let Err(err) = self.attempt_move(self.write_cursor) {
                    debug!(%err, "write ignored");
                }
            }
            self.write_cursor = self.write_cursor.saturating_add(1);
        }
        bytes.len()
    }

    /// Dispatch a numeric control command.
    #[instrument(skip(self))]
    pub fn control(&mut self, code: u32, arg: u64) -> Result<Response, DeviceError> {
        let command = Command::from_code(code).ok_or_else(|| {
            warn!(code, "unknown command ignored");
            DeviceError::UnknownCommand { code }
        })?;

        match command {
            Command::GetCurrentTurn => Ok(Response::Turn(self.current_turn())),
            Command::GetInfo => {
                let Info { dark, light } = self.info();
                Ok(Response::Info { dark, light })
            }
            Command::SetCurrentTurn => self.set_turn(arg).map(|_| Response::Done),
            Command::ResetGame => {
                self.reset();
                Ok(Response::Done)
            }
        }
    }

    pub fn current_turn(&self) -> Turn {
        let turn = self.game.current_turn();
        debug!(%turn, "current turn");
        turn
    }

    pub fn info(&self) -> Info {
        let info = Info {
            dark: self.game.count(CellState::Dark),
            light: self.game.count(CellState::Light),
        };
        debug!(dark = info.dark, light = info.light, "disk counts");
        info
    }

    /// Force the turn from its numeric code (0 dark, 1 light).
    pub fn set_turn(&mut self, value: u64) -> Result<Turn, DeviceError> {
        let turn = turn_from_code(value).ok_or_else(|| {
            warn!(value, "turn value ignored");
            DeviceError::InvalidTurn { value }
        })?;
        self.game.set_turn(turn);
        Ok(turn)
    }

    /// Attempt a move at a row-major offset for the colour to move.
    /// `Ok(false)` means the move was illegal; the board is unchanged.
    pub fn attempt_move(&mut self, offset: i64) -> Result<bool, DeviceError> {
        let loc = Location::from_offset(offset).ok_or_else(|| {
            warn!(offset, "move offset ignored");
            DeviceError::OffsetOutOfRange { offset }
        })?;
        Ok(self.game.apply_move(loc))
    }

    /// Return to the starting position and rewind the write cursor.
    pub fn reset(&mut self) {
        self.game.reset();
        self.write_cursor = 0;
    }
}
