use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, GRID_SIZE};
use crate::error::ParseError;

/// A user-facing board square.
///
/// Rank 1 is the light side's back rank, files 1..=8 correspond to `a..=h`.
/// Squares outside `[1,8]x[1,8]` can be constructed; they are simply off
/// the board (see [`Square::is_on_board`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        let on = |v: i8| (1..=GRID_SIZE).contains(&i32::from(v));
        on(self.rank) && on(self.file)
    }

    /// Storage coordinate: `row = 8 - rank`, `col = file - 1`.
    #[inline]
    pub fn to_internal(self) -> Coord {
        Coord::new(GRID_SIZE - i32::from(self.rank), i32::from(self.file) - 1)
    }

    /// Inverse of [`Square::to_internal`]: `rank = 8 - row`, `file = col + 1`.
    ///
    /// Components beyond the `i8` range saturate, so far off-grid
    /// coordinates stay off the board.
    #[inline]
    pub fn from_internal(c: Coord) -> Square {
        Square::new(
            narrow(GRID_SIZE.saturating_sub(c.row)),
            narrow(c.col.saturating_add(1)),
        )
    }

    /// All 64 on-board squares, rank 8 first (storage order).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Square::from_internal(Coord::new(row, col))))
    }
}

fn narrow(v: i32) -> i8 {
    i8::try_from(v).unwrap_or(if v < 0 { i8::MIN } else { i8::MAX })
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + (self.file - 1) as u8) as char;
            write!(f, "{file}{}", self.rank)
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses algebraic notation such as `"e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Square::new(rank as i8 + 1, file as i8 + 1))
        } else {
            Err(ParseError::InvalidSquare(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_round_trip_for_every_square() {
        for rank in 1..=8 {
            for file in 1..=8 {
                let sq = Square::new(rank, file);
                assert!(sq.to_internal().is_on_grid());
                assert_eq!(Square::from_internal(sq.to_internal()), sq);
            }
        }
        for row in 0..8 {
            for col in 0..8 {
                let c = Coord::new(row, col);
                assert!(Square::from_internal(c).is_on_board());
                assert_eq!(Square::from_internal(c).to_internal(), c);
            }
        }
    }

    #[test]
    fn corners_map_to_expected_storage() {
        assert_eq!(Square::new(1, 1).to_internal(), Coord::new(7, 0));
        assert_eq!(Square::new(8, 8).to_internal(), Coord::new(0, 7));
    }

    #[test]
    fn off_board_is_representable() {
        assert!(!Square::new(0, 4).is_on_board());
        assert!(!Square::new(9, 4).is_on_board());
        assert!(!Square::new(4, 0).is_on_board());
        let past_top = Square::new(8, 1).to_internal() + Coord::new(-1, 0);
        assert!(!Square::from_internal(past_top).is_on_board());
    }

    #[test]
    fn extreme_values_translate_without_overflow() {
        for sq in [
            Square::new(1, i8::MIN),
            Square::new(i8::MIN, 1),
            Square::new(i8::MAX, i8::MAX),
        ] {
            assert!(!sq.to_internal().is_on_grid(), "{sq}");
            assert_eq!(Square::from_internal(sq.to_internal()), sq);
        }
        for c in [
            Coord::new(0, i32::from(i8::MAX)),
            Coord::new(i32::from(i8::MIN), 0),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert!(!Square::from_internal(c).is_on_board(), "{c:?}");
        }
    }

    #[test]
    fn algebraic_notation() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4, Square::new(4, 5));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!("H8".parse::<Square>().unwrap(), Square::new(8, 8));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn all_yields_64_distinct_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(8, 1));
        assert_eq!(squares[63], Square::new(1, 8));
    }
}
