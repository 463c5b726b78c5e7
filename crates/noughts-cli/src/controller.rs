//! Event-driven game controller with the search on a worker thread.

use std::io::{BufRead, Write};
use std::sync::mpsc;

use tracing::{debug, info, warn};

use noughts_engine::{Player, SearchResult};

use crate::command::{Command, parse_command};
use crate::error::CliError;
use crate::session::{Session, SessionConfig};

/// Whether a search is in flight.
enum ControllerState {
    Idle,
    Thinking,
}

/// Events processed by the main controller loop.
enum ControllerEvent {
    Input(Result<Command, CliError>),
    SearchDone(Option<SearchResult>),
    InputClosed,
}

/// Runs a human-versus-computer game over a line protocol.
///
/// The main loop owns the session. Searches run on a worker thread against
/// a private copy of the board and post their result back on the event
/// channel, so the session board only ever changes by committed moves.
pub struct Controller<W: Write> {
    session: Session,
    state: ControllerState,
    out: W,
}

impl<W: Write> Controller<W> {
    /// Create a controller writing to `out`.
    pub fn new(config: SessionConfig, out: W) -> Self {
        Self {
            session: Session::new(config),
            state: ControllerState::Idle,
            out,
        }
    }

    /// Run the event loop, reading commands from `input` until `quit` or input closes.
    ///
    /// A pending search is always allowed to finish before returning.
    pub fn run<R>(mut self, input: R) -> Result<(), CliError>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ControllerEvent>();

        let input_tx = tx.clone();
        std::thread::spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else {
                    break;
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                debug!(cmd = %trimmed, "received command");
                if input_tx
                    .send(ControllerEvent::Input(parse_command(trimmed)))
                    .is_err()
                {
                    return;
                }
            }
            let _ = input_tx.send(ControllerEvent::InputClosed);
        });

        self.show()?;
        self.maybe_start_search(&tx);

        for event in &rx {
            match event {
                ControllerEvent::Input(Ok(Command::Quit)) | ControllerEvent::InputClosed => {
                    if matches!(self.state, ControllerState::Thinking) {
                        for ev in &rx {
                            if let ControllerEvent::SearchDone(result) = ev {
                                self.finish_search(result)?;
                                break;
                            }
                        }
                    }
                    break;
                }
                ControllerEvent::Input(Ok(cmd)) => self.handle_command(cmd, &tx)?,
                ControllerEvent::Input(Err(e)) => {
                    warn!(error = %e, "command parse error");
                    writeln!(self.out, "error: {e}")?;
                }
                ControllerEvent::SearchDone(result) => {
                    self.finish_search(result)?;
                    self.maybe_start_search(&tx);
                }
            }
        }

        info!("noughts shutting down");
        Ok(())
    }

    fn handle_command(
        &mut self,
        cmd: Command,
        tx: &mpsc::Sender<ControllerEvent>,
    ) -> Result<(), CliError> {
        if let Command::Show = cmd {
            return self.show();
        }
        if let Command::Unknown(_) = cmd {
            return Ok(());
        }
        if matches!(self.state, ControllerState::Thinking) {
            warn!("command received while thinking, ignoring");
            writeln!(self.out, "error: {}", CliError::Busy)?;
            return Ok(());
        }

        let result = match cmd {
            Command::New => {
                self.session.restart();
                Ok(())
            }
            Command::Swap => {
                self.session.switch_sides();
                Ok(())
            }
            Command::ComputerFirst => {
                self.session.switch_starting();
                Ok(())
            }
            Command::Set(option) => {
                self.session.apply_option(option);
                Ok(())
            }
            Command::Position(board) => {
                self.session.set_position(board);
                Ok(())
            }
            Command::Play(cell) => self.session.human_move(cell),
            Command::Go => {
                if self.session.board().outcome().is_terminal() {
                    Err(noughts_core::MoveError::GameOver.into())
                } else {
                    self.start_search(tx);
                    return Ok(());
                }
            }
            Command::Show | Command::Unknown(_) | Command::Quit => Ok(()),
        };

        match result {
            Ok(()) => {
                self.show()?;
                self.maybe_start_search(tx);
            }
            Err(e) => {
                warn!(error = %e, "command rejected");
                writeln!(self.out, "error: {e}")?;
            }
        }
        Ok(())
    }

    /// Start a search if the computer is to move.
    fn maybe_start_search(&mut self, tx: &mpsc::Sender<ControllerEvent>) {
        if matches!(self.state, ControllerState::Idle) && self.session.computer_to_move() {
            self.start_search(tx);
        }
    }

    /// Hand a copy of the board to a worker thread.
    fn start_search(&mut self, tx: &mpsc::Sender<ControllerEvent>) {
        let mut board = self.session.board().clone();
        let tx = tx.clone();

        std::thread::spawn(move || {
            let result = Player::new(&mut board).search();
            let _ = tx.send(ControllerEvent::SearchDone(result));
        });

        self.state = ControllerState::Thinking;
    }

    fn finish_search(&mut self, result: Option<SearchResult>) -> Result<(), CliError> {
        self.state = ControllerState::Idle;

        let Some(result) = result else {
            writeln!(self.out, "computer passes")?;
            return Ok(());
        };

        debug!(
            best_move = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            "computer move"
        );
        self.session.apply_engine_move(result.best_move)?;
        writeln!(self.out, "computer plays {}", result.best_move)?;
        self.show()
    }

    fn show(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "{}", self.session.board().pretty())?;
        writeln!(self.out, "{}", self.session.status())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use noughts_core::Turn;

    use super::*;

    fn run_script(config: SessionConfig, script: &str) -> String {
        let mut out = Vec::new();
        let controller = Controller::new(config, &mut out);
        controller
            .run(Cursor::new(script.as_bytes().to_vec()))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_board_on_start() {
        let output = run_script(SessionConfig::default(), "quit\n");
        assert!(output.starts_with("   0 1 2\n0  . . .\n1  . . .\n2  . . .\nx to move\n"));
    }

    #[test]
    fn computer_replies_to_human_move() {
        let output = run_script(SessionConfig::default(), "play 1 1\nquit\n");
        assert!(output.contains("computer plays 0 0"), "output:\n{output}");
        assert!(output.ends_with("x to move\n"), "output:\n{output}");
    }

    #[test]
    fn computer_opens_when_configured() {
        let config = SessionConfig {
            starting: Turn::First,
            computer_begins: true,
        };
        let output = run_script(config, "quit\n");
        assert!(output.contains("computer plays 0 0"), "output:\n{output}");
        assert!(output.ends_with("o to move\n"), "output:\n{output}");
    }

    #[test]
    fn illegal_input_is_reported() {
        let output = run_script(SessionConfig::default(), "play 7 7\nset depth 3\nquit\n");
        assert!(output.contains("error: illegal move: cell 7 7 is outside a 3x3 grid"));
        assert!(output.contains("error: unknown option: depth"));
    }

    #[test]
    fn input_closing_waits_for_search() {
        let output = run_script(SessionConfig::default(), "play 0 0\n");
        assert!(output.contains("computer plays 1 1"), "output:\n{output}");
    }

    #[test]
    fn go_on_finished_game_is_rejected() {
        let output = run_script(
            SessionConfig::default(),
            "position XXX/OO./... o\ngo\nquit\n",
        );
        assert!(output.contains("x won the game!"));
        assert!(output.contains("error: illegal move: the game is over"));
    }

    #[test]
    fn oversized_position_is_rejected() {
        let output = run_script(
            SessionConfig::default(),
            "position ..../..../..../.... o\nquit\n",
        );
        assert!(
            output.contains("error: unsupported board size 4, expected 3"),
            "output:\n{output}"
        );
        assert!(!output.contains("computer plays"), "output:\n{output}");
        assert_eq!(output.matches("x to move").count(), 1);
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let output = run_script(SessionConfig::default(), "foobar\nquit\n");
        assert_eq!(output.matches("x to move").count(), 1);
        assert!(!output.contains("error"));
    }
}
