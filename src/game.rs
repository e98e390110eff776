use std::fmt;

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::chess::mv::Move;
use crate::chess::piece::Color;
use crate::chess::rules;
use crate::core::board::Board;
use crate::core::square::Square;
use crate::error::{ChessError, InvalidMoveReason};
use crate::snapshot::BoardSnapshot;

/// Game status, derived from the board and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// The given side is checkmated.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.other()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate(loser) => {
                write!(f, "checkmate, {} wins", loser.other())
            }
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// A two-player game: one board, the side to move, and the moves played.
///
/// The game takes no locks; callers sharing one instance must serialize
/// access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starting position, light to move.
    pub fn new() -> Self {
        Self::from_position(Board::starting(), Color::Light)
    }

    /// Resume from an arbitrary board.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        Self {
            board,
            turn: to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Moves applied since this game was created, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Legal moves of the piece on `sq`, whoever's turn it is.
    pub fn legal_moves(&self, sq: Square) -> Result<FxHashSet<Move>, ChessError> {
        rules::legal_moves(&self.board, sq)
    }

    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        rules::all_legal_moves(&self.board, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.board, color)
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        rules::is_checkmate(&self.board, color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        rules::is_stalemate(&self.board, color)
    }

    /// Status for the side to move.
    pub fn status(&self) -> GameStatus {
        if rules::has_any_legal_move(&self.board, self.turn) {
            GameStatus::InProgress
        } else if rules::is_in_check(&self.board, self.turn) {
            GameStatus::Checkmate(self.turn)
        } else {
            GameStatus::Stalemate
        }
    }

    /// Validates and plays `mv`, then passes the turn.
    ///
    /// On error the game is left unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let status = self.status();
        if status.is_over() {
            return Err(ChessError::GameOver(status));
        }

        let reject = |reason: InvalidMoveReason| {
            debug!("rejecting {mv}: {reason}");
            ChessError::InvalidMove { mv, reason }
        };

        // off-board sources hold no piece either
        let Some(piece) = self.board.piece_at(mv.from).ok().flatten() else {
            return Err(reject(InvalidMoveReason::NoPiece));
        };
        if piece.color != self.turn {
            return Err(reject(InvalidMoveReason::WrongTurn(self.turn)));
        }
        if !self.legal_moves(mv.from)?.contains(&mv) {
            return Err(reject(InvalidMoveReason::NotLegal));
        }

        self.board.apply_unchecked(&mv);
        self.history.push(mv);
        self.turn = self.turn.other();
        debug!("{} played {mv}; {} to move", piece.color, self.turn);

        let status = self.status();
        if status.is_over() {
            debug!("game over after {mv}: {status}");
        }
        Ok(())
    }
}
