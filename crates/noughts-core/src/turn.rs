//! Side to move.

use std::fmt;
use std::ops::Not;

use crate::mark::Mark;

/// Whose move is next, or `Neither` as the sentinel used by finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Turn {
    First = 0,
    Second = 1,
    Neither = 2,
}

impl Turn {
    /// The two sides that actually move, in index order.
    pub const SIDES: [Turn; 2] = [Turn::First, Turn::Second];

    /// Return the mark this side places (`Empty` for `Neither`).
    #[inline]
    pub const fn mark(self) -> Mark {
        match self {
            Turn::First => Mark::First,
            Turn::Second => Mark::Second,
            Turn::Neither => Mark::Empty,
        }
    }

    /// Return the opposing side. `Neither` maps to itself.
    #[inline]
    pub const fn flip(self) -> Turn {
        match self {
            Turn::First => Turn::Second,
            Turn::Second => Turn::First,
            Turn::Neither => Turn::Neither,
        }
    }

    /// Parse the side-to-move field of position notation.
    pub const fn from_char(c: char) -> Option<Turn> {
        match c {
            'x' => Some(Turn::First),
            'o' => Some(Turn::Second),
            '-' => Some(Turn::Neither),
            _ => None,
        }
    }
}

impl Not for Turn {
    type Output = Turn;

    #[inline]
    fn not(self) -> Turn {
        self.flip()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::First => write!(f, "x"),
            Turn::Second => write!(f, "o"),
            Turn::Neither => write!(f, "-"),
        }
    }
}
