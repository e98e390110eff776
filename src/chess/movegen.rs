//! Pseudo-legal move generation: movement shape, blocking and capture rules,
//! without regard to the mover's own king safety.

use crate::chess::mv::Move;
use crate::chess::piece::{
    Piece, PieceKind, BISHOP_DIRS, KNIGHT_DELTAS, QUEEN_DIRS, ROOK_DIRS,
};
use crate::core::board::Board;
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::square::Square;
use crate::error::ChessError;

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Repeat each direction until blocked or off the board.
    Slide(&'static [Coord]),
    /// One jump per offset.
    Step(&'static [Coord]),
    /// Color-dependent pushes and diagonal captures.
    Pawn,
}

impl MoveStrategy {
    pub fn for_kind(kind: PieceKind) -> Self {
        use PieceKind::*;
        match kind {
            Bishop => MoveStrategy::Slide(&BISHOP_DIRS),
            Rook => MoveStrategy::Slide(&ROOK_DIRS),
            Queen => MoveStrategy::Slide(&QUEEN_DIRS),
            King => MoveStrategy::Step(&KING_STEPS),
            Knight => MoveStrategy::Step(&KNIGHT_DELTAS),
            Pawn => MoveStrategy::Pawn,
        }
    }

    /// Appends the moves of `piece` standing on `from` to `out`.
    pub fn generate(self, board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
        match self {
            MoveStrategy::Slide(dirs) => slide_moves(board, from, piece, dirs, out),
            MoveStrategy::Step(deltas) => step_moves(board, from, piece, deltas, out),
            MoveStrategy::Pawn => pawn_moves(board, from, piece, out),
        }
    }
}

/// Pseudo-legal moves of the piece on `from`.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Result<Vec<Move>, ChessError> {
    let piece = board
        .piece_at(from)?
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    let mut out = Vec::new();
    MoveStrategy::for_kind(piece.kind).generate(board, from, piece, &mut out);
    Ok(out)
}

/// True iff some pseudo-legal move of the piece on `from` lands on `target`.
pub(crate) fn reaches(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    let mut out = Vec::new();
    MoveStrategy::for_kind(piece.kind).generate(board, from, piece, &mut out);
    out.iter().any(|m| m.to == target)
}

fn slide_moves(board: &Board, from: Square, piece: Piece, dirs: &[Coord], out: &mut Vec<Move>) {
    let origin = from.to_internal();
    for &dir in dirs {
        for step in 1.. {
            let to = origin + dir * step;
            if !to.is_on_grid() {
                break;
            }
            match board.get(to) {
                Some(other) if other.color == piece.color => break,
                Some(_) => {
                    out.push(Move::new(from, Square::from_internal(to)));
                    break;
                }
                None => out.push(Move::new(from, Square::from_internal(to))),
            }
        }
    }
}

fn step_moves(board: &Board, from: Square, piece: Piece, deltas: &[Coord], out: &mut Vec<Move>) {
    let origin = from.to_internal();
    for &d in deltas {
        let to = origin + d;
        if !to.is_on_grid() {
            continue;
        }
        if matches!(board.get(to), Some(other) if other.color == piece.color) {
            continue;
        }
        out.push(Move::new(from, Square::from_internal(to)));
    }
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let origin = from.to_internal();
    let forward = piece.color.pawn_forward();

    let one = origin + forward;
    if one.is_on_grid() && board.get(one).is_none() {
        push_pawn_move(from, Square::from_internal(one), piece, out);

        let two = one + forward;
        if from.rank == piece.color.pawn_start_rank() && two.is_on_grid() && board.get(two).is_none() {
            push_pawn_move(from, Square::from_internal(two), piece, out);
        }
    }

    for side in [Coord::new(0, -1), Coord::new(0, 1)] {
        let to = origin + forward + side;
        // No en passant: a diagonal step needs an enemy on the target.
        if matches!(board.get(to), Some(other) if other.color != piece.color) {
            push_pawn_move(from, Square::from_internal(to), piece, out);
        }
    }
}

fn push_pawn_move(from: Square, to: Square, piece: Piece, out: &mut Vec<Move>) {
    if to.rank == piece.color.promotion_rank() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promoting(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}
