//! Cell occupants.

use std::fmt;

/// The occupant of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    First = 0,
    Second = 1,
    Empty = 2,
}

impl Mark {
    /// Return `true` if the cell holds no mark.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Character used in position notation.
    pub const fn to_char(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
            Mark::Empty => '.',
        }
    }

    /// Parse a notation character, returning `None` if unrecognized.
    pub const fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' => Some(Mark::First),
            'O' => Some(Mark::Second),
            '.' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
