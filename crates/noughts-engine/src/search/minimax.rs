//! Minimax alpha-beta search to terminal positions.

use noughts_core::{Board, Cell, Outcome, Turn};

/// Score bound wider than any reachable score.
pub const INF: i32 = 1_000;

/// Score of a won game, from the winner's perspective.
pub const WIN_SCORE: i32 = 100;

/// Score of a drawn game.
pub const DRAW_SCORE: i32 = 0;

/// Minimax alpha-beta search.
///
/// Scores are from the perspective of `ctx.my_side`, fixed once at the root.
/// Nodes where that side moves maximize, the others minimize. There is no
/// depth limit and no depth discount: a win in one and a win in five both
/// score [`WIN_SCORE`].
///
/// Every child is visited through a [`MoveGuard`](noughts_core::MoveGuard),
/// so the board is restored when this returns.
pub(super) fn minimax(
    board: &mut Board,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    let outcome = board.outcome();
    if outcome.is_terminal() {
        return terminal_score(outcome, ctx.my_side);
    }

    let size = board.size();

    if board.turn() == ctx.my_side {
        let mut best = -INF;
        for cell in Cell::all(size) {
            if let Some(mut child) = board.scoped_move(cell.row, cell.col) {
                best = best.max(minimax(&mut child, alpha, beta, ctx));
                alpha = alpha.max(best);
                if alpha >= beta {
                    return best;
                }
            }
        }
        best
    } else {
        let mut best = INF;
        for cell in Cell::all(size) {
            if let Some(mut child) = board.scoped_move(cell.row, cell.col) {
                best = best.min(minimax(&mut child, alpha, beta, ctx));
                beta = beta.min(best);
                if alpha >= beta {
                    return best;
                }
            }
        }
        best
    }
}

/// Score a decided position for `my_side`.
pub(super) fn terminal_score(outcome: Outcome, my_side: Turn) -> i32 {
    if outcome.winner() == my_side {
        WIN_SCORE
    } else if outcome == Outcome::Draw {
        DRAW_SCORE
    } else {
        -WIN_SCORE
    }
}

/// Search state threaded through minimax calls.
pub(super) struct SearchContext {
    /// The side the search is optimizing for.
    pub my_side: Turn,
    /// Total nodes visited.
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(my_side: Turn) -> Self {
        Self { my_side, nodes: 0 }
    }
}
