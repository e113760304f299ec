//! `othello-device` exposes an [`othello_engine::Game`] through a narrow
//! character-device style surface: byte reads of the rendered board,
//! positional glyph writes, and numeric control commands.
//!
//! [`Device`] is the single owner of the game. It takes `&mut self` for every
//! mutation, so a host serving several callers at once has to put it behind a
//! lock of its own.

mod command;
mod config;
mod device;
mod error;
pub mod host;

pub use command::*;
pub use config::*;
pub use device::*;
pub use error::*;
