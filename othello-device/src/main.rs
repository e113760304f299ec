//! Interactive host for the Othello device.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use othello_device::{host, Device, DeviceConfig};
use othello_engine::Turn;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Drive an Othello game through its character-device command surface.
#[derive(Parser, Debug)]
#[command(name = "othello-device")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour that moves first, overriding the config file
    #[arg(long, value_enum)]
    first_turn: Option<TurnArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TurnArg {
    Dark,
    Light,
}

impl From<TurnArg> for Turn {
    fn from(arg: TurnArg) -> Self {
        match arg {
            TurnArg::Dark => Turn::Dark,
            TurnArg::Light => Turn::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DeviceConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DeviceConfig::default(),
    };
    if let Some(turn) = cli.first_turn {
        config.first_turn = turn.into();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(first_turn = %config.first_turn, "Starting othello device");
    let mut device = Device::new(&config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    host::run(&mut device, stdin.lock(), stdout.lock(), config.read_chunk)?;

    info!("Othello device closed");
    Ok(())
}
