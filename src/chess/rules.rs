use log::trace;
use rustc_hash::FxHashSet;

use crate::chess::movegen::{reaches, MoveStrategy};
use crate::chess::mv::Move;
use crate::chess::piece::{Color, Piece};
use crate::core::board::Board;
use crate::core::square::Square;
use crate::error::ChessError;

/// Does any piece of color `by` have a pseudo-legal move onto `target`?
///
/// Turn order and the attacker's own king safety are ignored.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(from, p)| reaches(board, from, p, target))
}

/// True iff `color`'s king is attacked.
///
/// A side without a king on the board is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked(board, king, color.other()),
        None => false,
    }
}

/// Pseudo-legal moves of the piece on `from` that do not leave its own king
/// attacked.
pub fn legal_moves(board: &Board, from: Square) -> Result<FxHashSet<Move>, ChessError> {
    let piece = board
        .piece_at(from)?
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    Ok(legal_moves_of(board, from, piece))
}

/// [`legal_moves`] for a piece already known to stand on `from`. Each
/// candidate is tested on a throwaway clone of `board`.
pub(crate) fn legal_moves_of(board: &Board, from: Square, piece: Piece) -> FxHashSet<Move> {
    let mut candidates = Vec::new();
    MoveStrategy::for_kind(piece.kind).generate(board, from, piece, &mut candidates);

    let mut out = FxHashSet::default();
    for mv in candidates {
        if is_in_check(&board.with_move(&mv), piece.color) {
            trace!("discarding {mv}: leaves {} king attacked", piece.color);
            continue;
        }
        out.insert(mv);
    }
    out
}

/// Every legal move available to `color`, sorted.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out: Vec<Move> = own_pieces(board, color)
        .flat_map(|(from, piece)| legal_moves_of(board, from, piece))
        .collect();
    out.sort();
    out
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    own_pieces(board, color).any(|(from, piece)| !legal_moves_of(board, from, piece).is_empty())
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    !has_any_legal_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    if is_in_check(board, color) {
        return false;
    }
    !has_any_legal_move(board, color)
}

fn own_pieces(board: &Board, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
    board.pieces().filter(move |(_, p)| p.color == color)
}
