//! Leaf-node counting over the legal move tree.
//!
//! `perft` is the usual check on move generation: the counts from the
//! starting position are well known for the first few plies.

use rayon::prelude::*;

use crate::chess::piece::Color;
use crate::chess::rules::all_legal_moves;
use crate::core::board::Board;

/// Number of move sequences of exactly `depth` plies from `board` with
/// `to_move` moving first. Terminal positions before `depth` count as 0.
pub fn perft(board: &Board, to_move: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(board, to_move);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&board.with_move(mv), to_move.other(), depth - 1))
        .sum()
}

/// Same count as [`perft`], with root moves split across the rayon pool.
pub fn perft_parallel(board: &Board, to_move: Color, depth: u32) -> u64 {
    if depth <= 1 {
        return perft(board, to_move, depth);
    }
    all_legal_moves(board, to_move)
        .par_iter()
        .map(|mv| perft(&board.with_move(mv), to_move.other(), depth - 1))
        .sum()
}
