use std::fmt;

use crate::chess::mv::Move;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::coord::{Coord, GRID_SIZE};
use crate::core::square::Square;
use crate::error::ChessError;
use crate::snapshot::BoardSnapshot;

const N: usize = GRID_SIZE as usize;

const BACK_RANK: [PieceKind; N] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, stored in `[row][col]` order.
///
/// Lookups hand out copies; the grid itself is only reachable through
/// `&mut Board`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; N]; N],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board in the standard starting arrangement.
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.reset_to_starting_position();
        board
    }

    /// Clears the board and places all 32 pieces in their starting squares.
    pub fn reset_to_starting_position(&mut self) {
        self.squares = [[None; N]; N];
        for color in Color::ALL {
            let back = Square::new(color.back_rank(), 1).to_internal().row as usize;
            let pawns = Square::new(color.pawn_start_rank(), 1).to_internal().row as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                self.squares[back][col] = Some(Piece::new(color, kind));
                self.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Writes `piece` (or clears the square on `None`), replacing any occupant.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) -> Result<(), ChessError> {
        if !sq.is_on_board() {
            return Err(ChessError::OutOfBounds(sq));
        }
        let c = sq.to_internal();
        self.squares[c.row as usize][c.col as usize] = piece;
        Ok(())
    }

    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, ChessError> {
        if !sq.is_on_board() {
            return Err(ChessError::OutOfBounds(sq));
        }
        Ok(self.get(sq.to_internal()))
    }

    /// Grid lookup that treats off-grid coordinates as empty.
    #[inline]
    pub(crate) fn get(&self, c: Coord) -> Option<Piece> {
        if c.is_on_grid() {
            self.squares[c.row as usize][c.col as usize]
        } else {
            None
        }
    }

    #[inline]
    fn set(&mut self, c: Coord, piece: Option<Piece>) {
        debug_assert!(c.is_on_grid());
        self.squares[c.row as usize][c.col as usize] = piece;
    }

    /// Every occupied square with its piece, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq.to_internal()).map(|p| (sq, p)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Moves the piece on `mv.from` to `mv.to`, honoring promotion.
    ///
    /// No legality checks; the source must hold a piece and both squares
    /// must be on the board.
    pub(crate) fn apply_unchecked(&mut self, mv: &Move) {
        let from = mv.from.to_internal();
        let to = mv.to.to_internal();
        debug_assert!(from.is_on_grid() && to.is_on_grid());
        let Some(piece) = self.get(from) else {
            debug_assert!(false, "apply_unchecked from empty square {}", mv.from);
            return;
        };
        let moved = match mv.promotion {
            Some(kind) => piece.with_kind(kind),
            None => piece,
        };
        self.set(from, None);
        self.set(to, Some(moved));
    }

    /// A clone with `mv` applied, used for legality simulation.
    pub(crate) fn with_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply_unchecked(mv);
        next
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.squares)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", GRID_SIZE as usize - row)?;
            for cell in cells {
                let ch = cell.map(Piece::letter).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
