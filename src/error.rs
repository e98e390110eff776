//! Typed failures returned by engine operations.
//!
//! Every variant is recoverable; the caller decides how to surface it.

use std::fmt;

use crate::chess::mv::Move;
use crate::chess::piece::Color;
use crate::core::square::Square;
use crate::game::GameStatus;

/// Why [`Game::apply_move`](crate::game::Game::apply_move) rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The source square is empty.
    NoPiece,
    /// The source piece belongs to the side that is not to move.
    WrongTurn(Color),
    /// Destination or promotion is not among the piece's legal moves.
    NotLegal,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::NoPiece => write!(f, "no piece at source square"),
            InvalidMoveReason::WrongTurn(to_move) => write!(f, "it is {to_move}'s turn"),
            InvalidMoveReason::NotLegal => write!(f, "not a legal move for that piece"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },

    #[error("game is already over: {0}")]
    GameOver(GameStatus),
}

/// Errors from parsing square or move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(char),
}
