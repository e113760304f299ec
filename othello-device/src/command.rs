//! Numeric control codes understood by [`crate::Device::control`].

use othello_engine::Turn;

/// Control commands, numbered in the order the device has always used.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    GetCurrentTurn = 0,
    GetInfo = 1,
    SetCurrentTurn = 2,
    ResetGame = 3,
}

impl Command {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Command::GetCurrentTurn),
            1 => Some(Command::GetInfo),
            2 => Some(Command::SetCurrentTurn),
            3 => Some(Command::ResetGame),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Decode the argument of [`Command::SetCurrentTurn`]: 0 is dark, 1 is light.
pub fn turn_from_code(value: u64) -> Option<Turn> {
    match value {
        0 => Some(Turn::Dark),
        1 => Some(Turn::Light),
        _ => None,
    }
}

pub fn turn_code(turn: Turn) -> u64 {
    match turn {
        Turn::Dark => 0,
        Turn::Light => 1,
    }
}

/// What a successful control command reports back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Response {
    Turn(Turn),
    Info { dark: usize, light: usize },
    Done,
}
