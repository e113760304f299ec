//! Error types for the command surface and its configuration.

use derive_more::{Display, Error};

/// Input the device refused. None of these change any state.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[display(fmt = "move offset {} is outside the board", offset)]
    OffsetOutOfRange { offset: i64 },
    #[display(fmt = "unknown command code {}", code)]
    UnknownCommand { code: u32 },
    #[display(fmt = "{} is not a turn value", value)]
    InvalidTurn { value: u64 },
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}", path)]
    Read { path: String, source: std::io::Error },
    #[display(fmt = "failed to parse config file {}", path)]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
