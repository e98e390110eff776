//! Piece rules on top of the board primitives.

pub mod movegen;
pub mod mv;
pub mod piece;
pub mod rules;
