//! Scoped move: commit on creation, undo on drop.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::cell::Cell;

/// A committed move that is undone when the guard goes out of scope.
///
/// Derefs to the board so a search can recurse through the guard while the
/// move is applied. Guards nest in strict LIFO order because each one holds
/// the exclusive borrow of the board (or of its parent guard).
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    cell: Cell,
}

impl<'a> MoveGuard<'a> {
    /// Wrap a move that has already been applied to `board`.
    pub(crate) fn new(board: &'a mut Board, cell: Cell) -> Self {
        Self { board, cell }
    }

    /// The cell this guard will clear.
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.cell.row, self.cell.col);
    }
}
