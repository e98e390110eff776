use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// One of the two teams. Light starts on ranks 1-2 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// One pawn step forward, in storage coordinates.
    ///
    /// Light moves toward rank 8, i.e. toward row 0.
    #[inline]
    pub fn pawn_forward(self) -> Coord {
        match self {
            Color::Light => Coord::new(-1, 0),
            Color::Dark => Coord::new(1, 0),
        }
    }

    /// Rank from which a pawn may advance two squares.
    #[inline]
    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Color::Light => 2,
            Color::Dark => 7,
        }
    }

    /// Farthest rank from this side's starting edge.
    #[inline]
    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub fn back_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Lowercase FEN letter.
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            King => 'k',
            Queen => 'q',
            Rook => 'r',
            Bishop => 'b',
            Knight => 'n',
            Pawn => 'p',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        use PieceKind::*;
        match c.to_ascii_lowercase() {
            'k' => Some(King),
            'q' => Some(Queen),
            'r' => Some(Rook),
            'b' => Some(Bishop),
            'n' => Some(Knight),
            'p' => Some(Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// A piece carries no position; its square is its slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn letter(self) -> char {
        match self.color {
            Color::Light => self.kind.letter().to_ascii_uppercase(),
            Color::Dark => self.kind.letter(),
        }
    }

    pub fn glyph(self) -> char {
        use PieceKind::*;
        match (self.color, self.kind) {
            (Color::Light, King) => '♔',
            (Color::Light, Queen) => '♕',
            (Color::Light, Rook) => '♖',
            (Color::Light, Bishop) => '♗',
            (Color::Light, Knight) => '♘',
            (Color::Light, Pawn) => '♙',
            (Color::Dark, King) => '♚',
            (Color::Dark, Queen) => '♛',
            (Color::Dark, Rook) => '♜',
            (Color::Dark, Bishop) => '♝',
            (Color::Dark, Knight) => '♞',
            (Color::Dark, Pawn) => '♟',
        }
    }

    #[inline]
    pub fn with_kind(self, kind: PieceKind) -> Piece {
        Piece::new(self.color, kind)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
];
