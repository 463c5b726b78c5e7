//! The game board: grid of marks plus side to move.

use std::fmt;

use tracing::debug;

use crate::cell::Cell;
use crate::error::{BoardError, MoveError};
use crate::guard::MoveGuard;
use crate::mark::Mark;
use crate::outcome::Outcome;
use crate::turn::Turn;

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 3;

/// Square grid of marks and the side to move.
///
/// Mutated only through [`make_move`](Board::make_move) /
/// [`undo_move`](Board::undo_move) pairs. The outcome is never cached;
/// [`outcome`](Board::outcome) rescans the grid on every call.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Marks in row-major order, `size * size` long.
    cells: Vec<Mark>,
    /// Side length of the grid.
    size: usize,
    /// Which side moves next. Never [`Turn::Neither`].
    turn: Turn,
}

impl Board {
    /// Return an empty 3x3 board with First to move.
    pub fn new() -> Board {
        Board::with_size(DEFAULT_SIZE)
    }

    /// Return an empty `size` x `size` board with First to move.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_size(size: usize) -> Board {
        assert!(size > 0, "board size must be positive");
        Board {
            cells: vec![Mark::Empty; size * size],
            size,
            turn: Turn::First,
        }
    }

    /// Return an empty 3x3 board with `starting` to move.
    ///
    /// # Panics
    ///
    /// Panics if `starting` is [`Turn::Neither`].
    pub fn with_starting(starting: Turn) -> Board {
        assert!(starting != Turn::Neither, "a game must start with a side to move");
        Board {
            turn: starting,
            ..Board::new()
        }
    }

    /// Construct a board from raw components. Used by notation parsing.
    pub(crate) fn from_raw(cells: Vec<Mark>, size: usize, turn: Turn) -> Board {
        debug_assert_eq!(cells.len(), size * size);
        Board { cells, size, turn }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Return the mark at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn mark(&self, row: usize, col: usize) -> Mark {
        self.cells[self.index(row, col)]
    }

    /// Return the mark on `cell`.
    #[inline]
    pub fn mark_at(&self, cell: Cell) -> Mark {
        self.mark(cell.row, cell.col)
    }

    /// Place the side to move's mark on `(row, col)` and pass the turn.
    ///
    /// Returns `false` without touching the board if the cell is occupied.
    /// The board does not refuse moves once the game is decided; callers
    /// that take untrusted input should go through [`try_move`](Board::try_move).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        let idx = self.index(row, col);
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = self.turn.mark();
        self.turn = self.turn.flip();
        true
    }

    /// Clear `(row, col)` and hand the turn back to the side that moved there.
    ///
    /// Must only undo the most recent outstanding [`make_move`](Board::make_move).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid. Debug-asserts that the
    /// cell is occupied.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        debug_assert!(
            !self.cells[idx].is_empty(),
            "undo of empty cell ({row}, {col})"
        );
        self.cells[idx] = Mark::Empty;
        self.turn = self.turn.flip();
    }

    /// Commit a move and return a guard that undoes it when dropped.
    ///
    /// Returns `None` (and leaves the board untouched) if the cell is occupied.
    pub fn scoped_move(&mut self, row: usize, col: usize) -> Option<MoveGuard<'_>> {
        if self.make_move(row, col) {
            Some(MoveGuard::new(self, Cell::new(row, col)))
        } else {
            None
        }
    }

    /// Checked move for untrusted coordinates.
    ///
    /// Rejects cells outside the grid, moves after the game is decided, and
    /// occupied cells, in that order.
    pub fn try_move(&mut self, cell: Cell) -> Result<(), MoveError> {
        let result = if !cell.fits(self.size) {
            Err(MoveError::OutOfBounds {
                cell,
                size: self.size,
            })
        } else if self.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else if !self.make_move(cell.row, cell.col) {
            Err(MoveError::Occupied { cell })
        } else {
            Ok(())
        };

        if let Err(ref err) = result {
            debug!(%cell, error = %err, "move rejected");
        }
        result
    }

    /// Classify the position.
    ///
    /// Lines are checked rows first (top to bottom), then columns (left to
    /// right), then the main diagonal and the anti-diagonal. The first
    /// complete line decides the winner.
    pub fn outcome(&self) -> Outcome {
        let n = self.size;

        for row in 0..n {
            if let Some(mark) = self.line_owner((0..n).map(|col| Cell::new(row, col))) {
                return won_by(mark);
            }
        }

        for col in 0..n {
            if let Some(mark) = self.line_owner((0..n).map(|row| Cell::new(row, col))) {
                return won_by(mark);
            }
        }

        if let Some(mark) = self.line_owner((0..n).map(|i| Cell::new(i, i))) {
            return won_by(mark);
        }

        if let Some(mark) = self.line_owner((0..n).map(|i| Cell::new(i, n - 1 - i))) {
            return won_by(mark);
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Unfinished
        }
    }

    /// Return the mark filling every cell of `line`, if any.
    fn line_owner(&self, mut line: impl Iterator<Item = Cell>) -> Option<Mark> {
        let first = self.mark_at(line.next()?);
        if first.is_empty() {
            return None;
        }
        line.all(|cell| self.mark_at(cell) == first).then_some(first)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all(self.size).filter(|&cell| self.mark_at(cell).is_empty())
    }

    /// Return `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.cells.len() - self.count(Mark::Empty)
    }

    /// Check that the mark counts agree with strict alternation.
    ///
    /// Either side may have started, so equal counts are consistent with
    /// either side to move. Otherwise the side with fewer marks must be to move.
    pub fn validate(&self) -> Result<(), BoardError> {
        let first = self.count(Mark::First);
        let second = self.count(Mark::Second);

        if first.abs_diff(second) > 1 {
            return Err(BoardError::MarkImbalance { first, second });
        }

        let expected = if first > second {
            Some(Turn::Second)
        } else if second > first {
            Some(Turn::First)
        } else {
            None
        };

        match expected {
            Some(turn) if turn != self.turn => Err(BoardError::WrongSideToMove { turn: self.turn }),
            _ => Ok(()),
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Row-major index of `(row, col)`, panicking outside the grid.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        let cell = Cell::new(row, col);
        assert!(
            cell.fits(self.size),
            "cell ({row}, {col}) outside {n}x{n} grid",
            n = self.size
        );
        cell.index(self.size)
    }
}

fn won_by(mark: Mark) -> Outcome {
    match mark {
        Mark::First => Outcome::FirstWon,
        Mark::Second => Outcome::SecondWon,
        Mark::Empty => unreachable!("empty lines are never owned"),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a grid with row and column indices.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let n = board.size();

        write!(f, "  ")?;
        for col in 0..n {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..n {
            write!(f, "{row} ")?;
            for col in 0..n {
                write!(f, " {}", board.mark(row, col))?;
            }
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
