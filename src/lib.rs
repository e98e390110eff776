//! A two-player chess rules engine: board, per-piece move generation,
//! check-safe legal move filtering, and checkmate / stalemate detection.
//!
//! Castling, en passant and draw rules other than stalemate are not modeled.

pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod perft;
pub mod snapshot;

pub use crate::chess::mv::Move;
pub use crate::chess::piece::{Color, Piece, PieceKind};
pub use crate::core::board::Board;
pub use crate::core::square::Square;
pub use crate::error::{ChessError, InvalidMoveReason};
pub use crate::game::{Game, GameStatus};
