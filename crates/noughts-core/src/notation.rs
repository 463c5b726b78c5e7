//! One-line position notation for [`Board`].
//!
//! Rows top to bottom separated by `/`, cells `X`, `O` or `.`, then a space
//! and the side to move (`x` or `o`): `XX./OO./... x`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PositionError;
use crate::mark::Mark;
use crate::turn::Turn;

/// Notation for the empty 3x3 board with First to move.
pub const EMPTY_POSITION: &str = ".../.../... x";

impl FromStr for Board {
    type Err = PositionError;

    /// Parse notation without checking that the position is reachable.
    ///
    /// Use [`Board::validate`] when the position comes from untrusted input.
    fn from_str(s: &str) -> Result<Board, PositionError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(PositionError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, row_str) in rows.iter().enumerate() {
            let mut length = 0;
            for c in row_str.chars() {
                let mark = Mark::from_char(c).ok_or(PositionError::InvalidMarkChar { character: c })?;
                cells.push(mark);
                length += 1;
            }
            if length != size {
                return Err(PositionError::BadRowLength {
                    row,
                    length,
                    expected: size,
                });
            }
        }

        let turn = match fields[1] {
            "x" => Turn::First,
            "o" => Turn::Second,
            other => {
                return Err(PositionError::InvalidTurn {
                    found: other.to_string(),
                });
            }
        };

        Ok(Board::from_raw(cells, size, turn))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                write!(f, "{}", self.mark(row, col))?;
            }
            if row + 1 < n {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.turn())
    }
}
