//! Integration tests for the search engine playing full games.
//!
//! Verifies that perfect play draws against itself and that the engine
//! never loses against any sequence of opponent moves.

use noughts_core::{Board, Cell, Outcome, Turn};
use noughts_engine::Player;

/// Play engine against engine until the game ends.
fn self_play(mut board: Board) -> Outcome {
    loop {
        let Some(cell) = Player::new(&mut board).find_move() else {
            break;
        };
        assert!(board.make_move(cell.row, cell.col), "engine chose occupied {cell}");
    }
    board.outcome()
}

/// Explore every opponent move; the engine replies on its turns.
///
/// Returns the number of finished games and panics if the engine loses any.
fn engine_never_loses(board: &mut Board, engine: Turn) -> u64 {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        assert_ne!(
            outcome.winner(),
            engine.flip(),
            "engine lost in position {board}"
        );
        return 1;
    }

    if board.turn() == engine {
        let cell = Player::new(board).find_move().expect("unfinished game has a move");
        let mut child = board.scoped_move(cell.row, cell.col).expect("engine move is legal");
        return engine_never_loses(&mut child, engine);
    }

    let mut games = 0;
    for cell in Cell::all(board.size()) {
        if let Some(mut child) = board.scoped_move(cell.row, cell.col) {
            games += engine_never_loses(&mut child, engine);
        }
    }
    games
}

// ── Self-play ────────────────────────────────────────────────────────────────

#[test]
fn self_play_from_empty_board_draws() {
    assert_eq!(self_play(Board::new()), Outcome::Draw);
}

#[test]
fn self_play_with_second_starting_draws() {
    assert_eq!(self_play(Board::with_starting(Turn::Second)), Outcome::Draw);
}

#[test]
fn self_play_after_center_opening_draws() {
    let mut board = Board::new();
    assert!(board.make_move(1, 1));
    assert_eq!(self_play(board), Outcome::Draw);
}

#[test]
fn self_play_after_every_opening_draws() {
    for cell in Cell::all(3) {
        let mut board = Board::new();
        assert!(board.make_move(cell.row, cell.col));
        assert_eq!(self_play(board), Outcome::Draw, "opening {cell}");
    }
}

#[test]
fn self_play_is_deterministic() {
    let mut first = Board::new();
    let mut second = Board::new();
    loop {
        let Some(cell) = Player::new(&mut first).find_move() else {
            break;
        };
        assert_eq!(Player::new(&mut second).find_move(), Some(cell));
        first.make_move(cell.row, cell.col);
        second.make_move(cell.row, cell.col);
    }
    assert_eq!(first, second);
}

// ── Exhaustive opponents ─────────────────────────────────────────────────────

#[test]
fn engine_as_second_never_loses() {
    let mut board = Board::new();
    let games = engine_never_loses(&mut board, Turn::Second);
    assert!(games > 0);
    assert_eq!(board, Board::new(), "board must be restored");
}

#[test]
fn engine_as_first_never_loses() {
    let mut board = Board::new();
    let games = engine_never_loses(&mut board, Turn::First);
    assert!(games > 0);
    assert_eq!(board, Board::new(), "board must be restored");
}

// ── Scenario vectors ─────────────────────────────────────────────────────────

#[test]
fn completes_top_row_for_immediate_win() {
    let mut board: Board = "XX./OO./... x".parse().unwrap();
    let result = Player::new(&mut board).search().unwrap();
    assert_eq!(result.best_move, Cell::new(0, 2));
    assert_eq!(result.score, noughts_engine::WIN_SCORE);
    assert_eq!(board.to_string(), "XX./OO./... x");
}

#[test]
fn reply_to_center_does_not_lose() {
    let mut board = Board::new();
    board.make_move(1, 1);
    let result = Player::new(&mut board).search().unwrap();
    assert_eq!(result.score, noughts_engine::DRAW_SCORE);
    // Only the corners hold the draw against a center opening.
    assert_eq!(result.best_move, Cell::new(0, 0));
}
