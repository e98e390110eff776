use std::ops::{Add, Mul};

/// Side length of the grid.
pub const GRID_SIZE: i32 = 8;

/// A position (or offset) on the internal zero-based storage grid.
///
/// Row 0 is the rank farthest from the light side; column 0 is file `a`.
/// Values outside `0..8` are valid and simply lie off the grid, which lets
/// move generation step past the edge and discard the result. Components
/// are `i32` so that translating any `i8` square never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_on_grid(self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The 8 king steps around the origin.
pub const KING_STEPS: [Coord; 8] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 0 },
    Coord { row: -1, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 0, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 0 },
    Coord { row: 1, col: 1 },
];
