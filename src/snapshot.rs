//! Read-only board view handed to rendering and transport layers.

use serde::{Deserialize, Serialize};

use crate::chess::piece::Piece;
use crate::core::coord::GRID_SIZE;
use crate::core::square::Square;

const N: usize = GRID_SIZE as usize;

/// An owned copy of the grid: `rows[0]` is rank 8, `rows[r][0]` is file `a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    rows: [[Option<Piece>; N]; N],
}

impl BoardSnapshot {
    pub(crate) fn new(rows: [[Option<Piece>; N]; N]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[Option<Piece>; N]; N] {
        &self.rows
    }

    /// Contents of `sq`; `None` for empty or off-board squares.
    pub fn at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        let c = sq.to_internal();
        self.rows[c.row as usize][c.col as usize]
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.at(sq).map(|p| (sq, p)))
    }
}
