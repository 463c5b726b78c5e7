//! Core tic-tac-toe types: board representation, move/undo, and outcome detection.

mod board;
mod cell;
mod error;
mod guard;
mod mark;
mod notation;
mod outcome;
mod tree;
mod turn;

pub use board::{Board, DEFAULT_SIZE, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, MoveError, PositionError};
pub use guard::MoveGuard;
pub use mark::Mark;
pub use notation::EMPTY_POSITION;
pub use outcome::Outcome;
pub use tree::{count_games, divide};
pub use turn::Turn;
