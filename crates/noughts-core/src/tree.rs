//! Game-tree enumeration for move/undo correctness verification.

use crate::board::Board;
use crate::cell::Cell;

/// Count the complete games reachable from `board`.
///
/// A game ends at the first terminal outcome. A position that is already
/// decided counts as one game. The board is restored before returning.
pub fn count_games(board: &mut Board) -> u64 {
    if board.outcome().is_terminal() {
        return 1;
    }

    let mut games = 0u64;
    for cell in Cell::all(board.size()) {
        if let Some(mut child) = board.scoped_move(cell.row, cell.col) {
            games += count_games(&mut child);
        }
    }
    games
}

/// Run [`count_games`] with a per-move breakdown (useful for debugging).
///
/// Returns `(cell, games)` pairs in row-major order, one per empty cell.
pub fn divide(board: &mut Board) -> Vec<(Cell, u64)> {
    let mut results = Vec::new();
    for cell in Cell::all(board.size()) {
        if let Some(mut child) = board.scoped_move(cell.row, cell.col) {
            results.push((cell, count_games(&mut child)));
        }
    }
    results
}
