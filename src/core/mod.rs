//! Low-level primitives:
//!
//! - [`coord`]: zero-based storage coordinates and offset vectors.
//! - [`square`]: user-facing rank/file squares and the translation to storage.
//! - [`board`]: the 8x8 grid of optional pieces.

pub mod board;
pub mod coord;
pub mod square;
