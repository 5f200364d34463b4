//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A source/destination pair.
///
/// There is no move kind: a pawn reaching its promotion row is recognised
/// structurally when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts `e2e4`, `e2-e4` and `e2 e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        if !text.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        // At most one separator, and only between the two squares.
        let (src, dst) = match text.len() {
            4 => text.split_at(2),
            5 if matches!(text.as_bytes()[2], b'-' | b' ') => (&text[..2], &text[3..]),
            5 => return Err(invalid()),
            len => return Err(MoveParseError::InvalidLength { len }),
        };

        let from = src.parse::<Square>().map_err(|_| invalid())?;
        let to = dst.parse::<Square>().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}
