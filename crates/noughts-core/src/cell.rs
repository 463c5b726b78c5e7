//! Grid coordinates.

use std::fmt;

/// A zero-based `(row, col)` coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell from a row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// Row-major index into a grid of side length `size`.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Every cell of a grid of side length `size`, in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Cell> {
        (0..size * size).map(move |i| Cell::new(i / size, i % size))
    }

    /// Return `true` if the cell lies inside a grid of side length `size`.
    #[inline]
    pub const fn fits(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}
