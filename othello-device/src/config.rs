//! Device configuration loaded from TOML.

use crate::error::ConfigError;
use othello_engine::{Game, Turn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a [`crate::Device`] and its host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Colour to move at the start of every game and after every reset.
    pub first_turn: Turn,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Bytes requested per read when the host pulls the rendered board.
    pub read_chunk: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            first_turn: Game::DEFAULT_FIRST_TURN,
            log_filter: "info".to_string(),
            read_chunk: 80,
        }
    }
}

impl DeviceConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        debug!("Loading config from file");

        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            ConfigError::Read {
                path: path_str.clone(),
                source,
            }
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })?;

        info!(first_turn = %config.first_turn, "Config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
