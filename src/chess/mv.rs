use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::core::square::Square;
use crate::error::ParseError;

/// A move from one square to another.
///
/// `promotion` is set only for a pawn landing on its promotion rank. A
/// promoting move and a plain move with the same endpoints are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses coordinate notation: `"e2e4"`, or `"e7e8q"` for a promotion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(s.len() == 4 || s.len() == 5) {
            return Err(ParseError::InvalidMove(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_letter(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(ParseError::InvalidPromotion(c)),
            },
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
