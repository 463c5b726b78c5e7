//! Error types for checked moves, position notation, and board validation.

use crate::cell::Cell;

/// Errors from [`Board::try_move`](crate::board::Board::try_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The coordinates lie outside the grid.
    #[error("cell {cell} is outside a {size}x{size} grid")]
    OutOfBounds {
        /// The rejected cell.
        cell: Cell,
        /// Side length of the grid.
        size: usize,
    },
    /// The target cell already holds a mark.
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// The rejected cell.
        cell: Cell,
    },
    /// The game has already been decided.
    #[error("the game is over")]
    GameOver,
}

/// Errors that occur when parsing position notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The notation does not have exactly 2 space-separated fields.
    #[error("expected 2 position fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A row describes a different number of cells than there are rows.
    #[error("row {row} describes {length} cells, expected {expected}")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
        /// Side length implied by the row count.
        expected: usize,
    },
    /// An unrecognized character appeared in the grid.
    #[error("invalid mark character: '{character}'")]
    InvalidMarkChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "x" or "o".
    #[error("invalid side to move: \"{found}\"")]
    InvalidTurn {
        /// The invalid field.
        found: String,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// One side has more than one extra mark on the grid.
    #[error("mark counts out of balance: {first} X against {second} O")]
    MarkImbalance {
        /// Number of First marks.
        first: usize,
        /// Number of Second marks.
        second: usize,
    },
    /// The counts are balanced but the wrong side is to move.
    #[error("side to move {turn} is inconsistent with the mark counts")]
    WrongSideToMove {
        /// The recorded side to move.
        turn: crate::turn::Turn,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveError, PositionError};
    use crate::cell::Cell;
    use crate::turn::Turn;

    #[test]
    fn move_error_display() {
        let err = MoveError::OutOfBounds {
            cell: Cell::new(3, 1),
            size: 3,
        };
        assert_eq!(format!("{err}"), "cell 3 1 is outside a 3x3 grid");
        let err = MoveError::Occupied {
            cell: Cell::new(0, 0),
        };
        assert_eq!(format!("{err}"), "cell 0 0 is already occupied");
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::WrongFieldCount { found: 1 };
        assert_eq!(format!("{err}"), "expected 2 position fields, found 1");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::MarkImbalance { first: 3, second: 1 };
        assert_eq!(
            format!("{err}"),
            "mark counts out of balance: 3 X against 1 O"
        );
        let err = BoardError::WrongSideToMove { turn: Turn::Second };
        assert_eq!(
            format!("{err}"),
            "side to move o is inconsistent with the mark counts"
        );
    }
}
