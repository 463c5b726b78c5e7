//! Controller protocol errors.

use noughts_core::{BoardError, MoveError, PositionError};

/// Errors that can occur while handling controller commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command is missing a required argument.
    #[error("missing value for {command}")]
    MissingValue {
        /// The command or option missing its value.
        command: String,
    },

    /// A coordinate or option value could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// The parameter being parsed.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// The `position` argument is not valid notation.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying parse error.
        #[from]
        source: PositionError,
    },

    /// The `position` argument describes an unreachable position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },

    /// The `position` argument describes a grid the controller does not play.
    #[error("unsupported board size {size}, expected {expected}")]
    UnsupportedSize {
        /// Side length of the rejected grid.
        size: usize,
        /// The side length the controller plays on.
        expected: usize,
    },

    /// The board rejected a move.
    #[error("illegal move: {source}")]
    IllegalMove {
        /// The underlying move error.
        #[from]
        source: MoveError,
    },

    /// A human move arrived while it is the computer's turn.
    #[error("it is the computer's turn")]
    NotYourTurn,

    /// A board-changing command arrived while the computer is thinking.
    #[error("the computer is thinking")]
    Busy,

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
