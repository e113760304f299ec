//! Line-oriented host that drives a [`Device`] the way a calling process would.

use crate::command::{turn_code, Command, Response};
use crate::device::Device;
use anyhow::{bail, Context, Result};
use othello_engine::{Location, CANVAS_LEN};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
commands:
  read                 print the board
  write <text>         positional write; '@'/'O' at a cell offset places a disk,
                       the cursor carries over to the next write
  writeln <text>       the same, then a newline that rewinds the cursor
  move <A1|offset>     place a disk for the colour to move
  turn                 show the colour to move
  info                 show disk counts
  set-turn <0|1>       force the turn (0 dark, 1 light)
  ioctl <code> [arg]   raw control command
  reset                restart from the opening
  moves                list legal moves
  help                 show this text
  quit                 leave";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    Read,
    /// Text to write, and whether a newline follows it.
    Write(String, bool),
    Move(i64),
    Turn,
    Info,
    SetTurn(u64),
    Ioctl(u32, u64),
    Reset,
    Moves,
    Help,
    Quit,
}

impl std::str::FromStr for HostCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim(), ""),
        };

        let command = match word {
            "read" => HostCommand::Read,
            "write" => HostCommand::Write(rest.to_string(), false),
            "writeln" => HostCommand::Write(rest.to_string(), true),
            "move" => HostCommand::Move(parse_move(rest.trim())?),
            "turn" => HostCommand::Turn,
            "info" => HostCommand::Info,
            "set-turn" => HostCommand::SetTurn(
                rest.trim()
                    .parse::<u64>()
                    .with_context(|| format!("bad turn value {:?}", rest.trim()))?,
            ),
            "ioctl" => {
                let mut args = rest.split_whitespace();
                let code = args
                    .next()
                    .context("ioctl needs a command code")?
                    .parse::<u32>()
                    .context("bad command code")?;
                let arg = match args.next() {
                    Some(arg) => arg.parse::<u64>().context("bad ioctl argument")?,
                    None => 0,
                };
                HostCommand::Ioctl(code, arg)
            }
            "reset" => HostCommand::Reset,
            "moves" => HostCommand::Moves,
            "help" => HostCommand::Help,
            "quit" | "exit" => HostCommand::Quit,
            other => bail!("unknown command {:?}; try 'help'", other),
        };
        Ok(command)
    }
}

/// A move is either algebraic ("D3") or a raw row-major offset, which may be
/// out of range on purpose.
fn parse_move(arg: &str) -> Result<i64> {
    if let Ok(loc) = arg.parse::<Location>() {
        return Ok(loc.to_offset() as i64);
    }
    arg.parse()
        .with_context(|| format!("bad move {:?}; use A1..H8 or an offset", arg))
}

/// Pull the whole rendered board through [`Device::read`], `chunk` bytes at a time.
pub fn read_board(device: &mut Device, chunk: usize) -> Vec<u8> {
    let mut text = Vec::with_capacity(CANVAS_LEN);
    let mut buf = vec![0u8; chunk.max(1)];
    loop {
        let n = device.read(&mut buf, text.len());
        if n == 0 {
            return text;
        }
        text.extend_from_slice(&buf[..n]);
    }
}

/// Run commands from `input` until it ends or `quit` is read.
/// Bad input is reported on `output` and the loop carries on.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    device: &mut Device,
    input: R,
    mut output: W,
    read_chunk: usize,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {:#}", err)?;
                continue;
            }
        };
        debug!(?command, "host command");

        if command == HostCommand::Quit {
            break;
        }
        execute(device, command, &mut output, read_chunk)?;
    }
    output.flush()?;
    Ok(())
}

fn execute<W: Write>(
    device: &mut Device,
    command: HostCommand,
    output: &mut W,
    read_chunk: usize,
) -> Result<()> {
    match command {
        HostCommand::Read => output.write_all(&read_board(device, read_chunk))?,
        HostCommand::Write(text, newline) => {
            let mut bytes = text.into_bytes();
            if newline {
                bytes.push(b'\n');
            }
            let written = device.write(&bytes);
            writeln!(output, "wrote {} bytes", written)?;
        }
        HostCommand::Move(offset) => match device.attempt_move(offset) {
            Ok(true) => writeln!(output, "ok, {} to move", device.game().current_turn())?,
            Ok(false) => writeln!(output, "illegal move")?,
            Err(err) => writeln!(output, "error: {}", err)?,
        },
        HostCommand::Turn => {
            let code = Command::GetCurrentTurn.code();
            respond(device.control(code, 0), output)?
        }
        HostCommand::Info => respond(device.control(Command::GetInfo.code(), 0), output)?,
        HostCommand::SetTurn(value) => {
            respond(device.control(Command::SetCurrentTurn.code(), value), output)?
        }
        HostCommand::Ioctl(code, arg) => respond(device.control(code, arg), output)?,
        HostCommand::Reset => respond(device.control(Command::ResetGame.code(), 0), output)?,
        HostCommand::Moves => {
            let moves: Vec<String> = device
                .game()
                .legal_moves()
                .iter()
                .map(|loc| format!("{} ({})", loc, loc.to_offset()))
                .collect();
            if moves.is_empty() {
                writeln!(output, "no legal moves")?;
            } else {
                writeln!(output, "{}", moves.join(", "))?;
            }
        }
        HostCommand::Help => writeln!(output, "{}", HELP)?,
        HostCommand::Quit => {}
    }
    Ok(())
}

fn respond<W: Write>(
    response: Result<Response, crate::error::DeviceError>,
    output: &mut W,
) -> Result<()> {
    match response {
        Ok(Response::Turn(turn)) => writeln!(output, "{} ({})", turn, turn_code(turn))?,
        Ok(Response::Info { dark, light }) => writeln!(output, "Dark: {} Light: {}", dark, light)?,
        Ok(Response::Done) => writeln!(output, "ok")?,
        Err(err) => writeln!(output, "error: {}", err)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("read".parse::<HostCommand>().unwrap(), HostCommand::Read);
        assert_eq!("move D3".parse::<HostCommand>().unwrap(), HostCommand::Move(19));
        assert_eq!("move 70".parse::<HostCommand>().unwrap(), HostCommand::Move(70));
        assert_eq!("move -1".parse::<HostCommand>().unwrap(), HostCommand::Move(-1));
        assert_eq!(
            "write ..O".parse::<HostCommand>().unwrap(),
            HostCommand::Write("..O".to_string(), false)
        );
        assert_eq!(
            "writeln ..O".parse::<HostCommand>().unwrap(),
            HostCommand::Write("..O".to_string(), true)
        );
        assert_eq!(
            "ioctl 2 1".parse::<HostCommand>().unwrap(),
            HostCommand::Ioctl(2, 1)
        );
        assert_eq!("ioctl 1".parse::<HostCommand>().unwrap(), HostCommand::Ioctl(1, 0));
        assert_eq!("set-turn 0".parse::<HostCommand>().unwrap(), HostCommand::SetTurn(0));
        assert!("dance".parse::<HostCommand>().is_err());
        assert!("move Z9".parse::<HostCommand>().is_err());
    }

    #[test]
    fn read_board_any_chunk() {
        let mut device = Device::default();
        let whole = read_board(&mut device, CANVAS_LEN);
        assert_eq!(read_board(&mut device, 1), whole);
        assert_eq!(read_board(&mut device, 80), whole);
    }
}
