//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// Captures are not flagged: the destination's occupant is simply overwritten.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the from square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the to square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

/// Log notation: `e2-e4`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = match s.len() {
            5 if s.as_bytes()[2] == b'-' => (&s[..2], &s[3..]),
            4 if s.is_ascii() => (&s[..2], &s[2..]),
            _ => {
                return Err(MoveParseError::InvalidFormat {
                    notation: s.to_string(),
                })
            }
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}
