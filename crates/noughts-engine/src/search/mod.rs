//! Root move selection over the minimax search.

pub mod minimax;

use noughts_core::{Board, Cell};
use tracing::debug;

use minimax::{INF, SearchContext, minimax};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best cell for the side to move.
    pub best_move: Cell,
    /// Score of `best_move` from the mover's perspective.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
}

/// Computer opponent bound to a board.
///
/// The search mutates the board while it runs and restores it before
/// returning; the chosen move is reported, never committed.
#[derive(Debug)]
pub struct Player<'a> {
    board: &'a mut Board,
}

impl<'a> Player<'a> {
    /// Bind a player to `board`.
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// Return the best cell for the side to move, or `None` if the game is over.
    pub fn find_move(&mut self) -> Option<Cell> {
        self.search().map(|result| result.best_move)
    }

    /// Score every empty cell and return the best one.
    ///
    /// Cells are tried in row-major order and only a strictly greater score
    /// replaces the current best, so the earliest of equally scored cells wins.
    pub fn search(&mut self) -> Option<SearchResult> {
        if self.board.outcome().is_terminal() {
            return None;
        }

        let mut ctx = SearchContext::new(self.board.turn());
        let mut best: Option<(Cell, i32)> = None;

        for cell in Cell::all(self.board.size()) {
            let Some(mut child) = self.board.scoped_move(cell.row, cell.col) else {
                continue;
            };
            let score = minimax(&mut child, -INF, INF, &mut ctx);
            drop(child);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        let (best_move, score) = best?;
        debug!(
            side = %ctx.my_side,
            best_move = %best_move,
            score,
            nodes = ctx.nodes,
            "search complete"
        );

        Some(SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use noughts_core::{Mark, Turn};

    use super::minimax::{DRAW_SCORE, WIN_SCORE};

    fn search(board: &mut Board) -> Option<SearchResult> {
        Player::new(board).search()
    }

    #[test]
    fn debug_shows_bound_board() {
        let mut board: Board = "XX./OO./... x".parse().unwrap();
        let player = Player::new(&mut board);
        assert_eq!(
            format!("{player:?}"),
            "Player { board: Board(\"XX./OO./... x\") }"
        );
    }

    #[test]
    fn takes_immediate_win() {
        let mut board: Board = "XX./OO./... x".parse().unwrap();
        let result = search(&mut board).unwrap();
        assert_eq!(result.best_move, Cell::new(0, 2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn win_preferred_over_block() {
        // O can win on (1, 2); blocking X on (0, 2) comes first in row-major order.
        let mut board: Board = "XX./OO./X.. o".parse().unwrap();
        let result = search(&mut board).unwrap();
        assert_eq!(result.best_move, Cell::new(1, 2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn blocks_only_threat() {
        // X threatens the main diagonal; every other reply loses.
        let mut board: Board = "X.O/.X./... o".parse().unwrap();
        let result = search(&mut board).unwrap();
        assert_eq!(result.best_move, Cell::new(2, 2));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn board_is_unchanged_after_search() {
        let mut board: Board = "X../.O./..X o".parse().unwrap();
        let before = board.clone();
        let result = search(&mut board).unwrap();
        assert_eq!(board, before);
        assert_eq!(board.mark_at(result.best_move), Mark::Empty);
    }

    #[test]
    fn never_returns_occupied_cell() {
        let positions = [
            ".../.../... x",
            ".../.X./... o",
            "X../.O./... x",
            "XO./.X./..O x",
            "XOX/OXO/O.. x",
        ];
        for notation in positions {
            let mut board: Board = notation.parse().unwrap();
            let cell = Player::new(&mut board).find_move().unwrap();
            assert_eq!(board.mark_at(cell), Mark::Empty, "position {notation}");
        }
    }

    #[test]
    fn first_equal_cell_wins_ties() {
        // Every opening draws, so the first cell in row-major order is chosen.
        let mut board = Board::new();
        let result = search(&mut board).unwrap();
        assert_eq!(result.best_move, Cell::new(0, 0));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn finished_game_has_no_move() {
        let mut won: Board = "XXX/OO./... o".parse().unwrap();
        assert!(search(&mut won).is_none());

        let mut drawn: Board = "XOX/XOO/OXX o".parse().unwrap();
        assert!(search(&mut drawn).is_none());
    }

    #[test]
    fn searches_for_second_side() {
        let mut board = Board::with_starting(Turn::Second);
        board.make_move(1, 1);
        board.make_move(0, 0);
        assert_eq!(board.turn(), Turn::Second);
        let cell = Player::new(&mut board).find_move().unwrap();
        assert_eq!(board.mark_at(cell), Mark::Empty);
    }

    #[test]
    fn first_side_wins_on_two_by_two() {
        let mut board = Board::with_size(2);
        let result = search(&mut board).unwrap();
        assert_eq!(result.best_move, Cell::new(0, 0));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn counts_nodes() {
        let mut board: Board = "XOX/OXO/O.. x".parse().unwrap();
        let result = search(&mut board).unwrap();
        // (2, 1) draws after O fills the last cell; (2, 2) completes the diagonal.
        assert_eq!(result.best_move, Cell::new(2, 2));
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.nodes, 3);
    }
}
