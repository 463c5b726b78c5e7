//! Controller command parsing.

use noughts_core::{Board, Cell, DEFAULT_SIZE, Turn};

use crate::error::CliError;

/// A session option adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set starting x|o` -- which side opens the game.
    Starting(Turn),
    /// `set computer-first true|false` -- whether the computer plays the opening side.
    ComputerFirst(bool),
}

/// A parsed controller command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- restart with the current configuration.
    New,
    /// `play <row> <col>` -- make a human move.
    Play(Cell),
    /// `go` -- let the computer move for the side to move.
    Go,
    /// `show` -- print the board and status.
    Show,
    /// `position <notation>` -- replace the board.
    Position(Board),
    /// `swap` -- flip the starting side and restart.
    Swap,
    /// `computer-first` -- toggle whether the computer opens and restart.
    ComputerFirst,
    /// `set <name> <value>` -- change a session option and restart.
    Set(SessionOption),
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "go" => Ok(Command::Go),
        "show" => Ok(Command::Show),
        "swap" => Ok(Command::Swap),
        "computer-first" => Ok(Command::ComputerFirst),
        "quit" => Ok(Command::Quit),
        "play" => parse_play(&tokens[1..]),
        "position" => parse_position(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `play <row> <col>`. Bounds are checked by the board, not here.
fn parse_play(tokens: &[&str]) -> Result<Command, CliError> {
    let row = parse_index(tokens.first(), "row")?;
    let col = parse_index(tokens.get(1), "col")?;
    Ok(Command::Play(Cell::new(row, col)))
}

/// Parse `position <rows> <side>`, rejecting unreachable positions and
/// grids other than the default size.
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MissingValue {
            command: "position".to_string(),
        });
    }
    let board: Board = tokens.join(" ").parse()?;
    if board.size() != DEFAULT_SIZE {
        return Err(CliError::UnsupportedSize {
            size: board.size(),
            expected: DEFAULT_SIZE,
        });
    }
    board.validate()?;
    Ok(Command::Position(board))
}

/// Parse `set <name> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let name = *tokens.first().ok_or_else(|| CliError::MissingValue {
        command: "set".to_string(),
    })?;
    let value = *tokens.get(1).ok_or_else(|| CliError::MissingValue {
        command: name.to_string(),
    })?;

    let invalid = || CliError::InvalidValue {
        param: name.to_string(),
        value: value.to_string(),
    };

    let option = match name {
        "starting" => {
            let mut chars = value.chars();
            let turn = match (chars.next().and_then(Turn::from_char), chars.next()) {
                (Some(turn @ (Turn::First | Turn::Second)), None) => turn,
                _ => return Err(invalid()),
            };
            SessionOption::Starting(turn)
        }
        "computer-first" => SessionOption::ComputerFirst(value.parse().map_err(|_| invalid())?),
        _ => {
            return Err(CliError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::Set(option))
}

/// Parse a zero-based coordinate from a token.
fn parse_index(token: Option<&&str>, param: &str) -> Result<usize, CliError> {
    let value = token.ok_or_else(|| CliError::MissingValue {
        command: param.to_string(),
    })?;
    value.parse().map_err(|_| CliError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
