//! Game outcome classification.

use std::fmt;

use crate::turn::Turn;

/// Terminal or non-terminal classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    FirstWon,
    SecondWon,
    Draw,
    Unfinished,
}

impl Outcome {
    /// Return the winning side, or [`Turn::Neither`] for draws and unfinished games.
    #[inline]
    pub const fn winner(self) -> Turn {
        match self {
            Outcome::FirstWon => Turn::First,
            Outcome::SecondWon => Turn::Second,
            Outcome::Draw | Outcome::Unfinished => Turn::Neither,
        }
    }

    /// Return `true` once no further moves should be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Unfinished)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FirstWon => write!(f, "x won"),
            Outcome::SecondWon => write!(f, "o won"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Unfinished => write!(f, "unfinished"),
        }
    }
}
