//! Game session: the board plus who plays which side.

use noughts_core::{Board, Cell, Outcome, Turn};
use tracing::info;

use crate::command::SessionOption;
use crate::error::CliError;

/// Configuration knobs adjustable via `set`, `swap` and `computer-first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side that opens each game.
    pub starting: Turn,
    /// Whether the computer plays the opening side.
    pub computer_begins: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting: Turn::First,
            computer_begins: false,
        }
    }
}

/// A human-versus-computer game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    config: SessionConfig,
}

impl Session {
    /// Start a game with `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::with_starting(config.starting),
            config,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The side played by the computer.
    pub fn computer_side(&self) -> Turn {
        if self.config.computer_begins {
            self.config.starting
        } else {
            self.config.starting.flip()
        }
    }

    /// Return `true` if the game is unfinished and the computer is to move.
    pub fn computer_to_move(&self) -> bool {
        !self.board.outcome().is_terminal() && self.board.turn() == self.computer_side()
    }

    /// Throw away the board and start over with the configured opening side.
    pub fn restart(&mut self) {
        self.board = Board::with_starting(self.config.starting);
        info!(
            starting = %self.config.starting,
            computer = %self.computer_side(),
            "new game"
        );
    }

    /// Flip the opening side and restart.
    pub fn switch_sides(&mut self) {
        self.config.starting = self.config.starting.flip();
        self.restart();
    }

    /// Toggle whether the computer opens and restart.
    pub fn switch_starting(&mut self) {
        self.config.computer_begins = !self.config.computer_begins;
        self.restart();
    }

    /// Apply a `set` option and restart.
    pub fn apply_option(&mut self, option: SessionOption) {
        match option {
            SessionOption::Starting(turn) => self.config.starting = turn,
            SessionOption::ComputerFirst(on) => self.config.computer_begins = on,
        }
        self.restart();
    }

    /// Replace the board with an externally supplied position.
    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    /// Play a move for the human side.
    pub fn human_move(&mut self, cell: Cell) -> Result<(), CliError> {
        if self.computer_to_move() {
            return Err(CliError::NotYourTurn);
        }
        self.board.try_move(cell)?;
        Ok(())
    }

    /// Commit a move chosen by the search.
    pub fn apply_engine_move(&mut self, cell: Cell) -> Result<(), CliError> {
        self.board.try_move(cell)?;
        Ok(())
    }

    /// One-line summary of the game state.
    pub fn status(&self) -> String {
        match self.board.outcome() {
            Outcome::Unfinished => format!("{} to move", self.board.turn()),
            Outcome::Draw => "the game ended in a draw".to_string(),
            won => format!("{} won the game!", won.winner()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
