//! Bit-packed piece encoding.
//!
//! A piece fits in one byte: the kind tag lives in the low three bits,
//! one bit each marks black and white, and a final bit records whether
//! the piece has moved. The moved flag gates pawn double-steps and
//! castling eligibility; nothing else reads it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const KIND_MASK: u8 = 0b000_111;
const BLACK_BIT: u8 = 0b001_000;
const WHITE_BIT: u8 = 0b010_000;
const COLOR_MASK: u8 = BLACK_BIT | WHITE_BIT;
const MOVED_BIT: u8 = 0b100_000;

/// Piece kind tags. `None` marks an empty square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    None = 0,
    Pawn = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> PieceKind {
        match bits {
            1 => PieceKind::Pawn,
            2 => PieceKind::Rook,
            3 => PieceKind::Bishop,
            4 => PieceKind::Knight,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => PieceKind::None,
        }
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    const fn bits(self) -> u8 {
        match self {
            Color::White => WHITE_BIT,
            Color::Black => BLACK_BIT,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A board slot: piece kind, color, and moved flag packed into a byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(u8);

impl Piece {
    /// The empty square. Has no color and never reports as moved.
    pub const NONE: Piece = Piece(0);

    /// A fresh (unmoved) piece of the given kind and color.
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(kind as u8 | color.bits())
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_bits(self.0 & KIND_MASK)
    }

    /// The piece's color; `None` for an empty square.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_BIT => Some(Color::White),
            BLACK_BIT => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.0 & KIND_MASK == kind as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & COLOR_MASK == color.bits()
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 & KIND_MASK == 0
    }

    /// True for bishop, rook, and queen.
    #[inline]
    #[must_use]
    pub const fn is_sliding(self) -> bool {
        matches!(
            self.kind(),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_BIT != 0
    }

    /// This piece with its moved flag set.
    #[inline]
    #[must_use]
    pub const fn marked_moved(self) -> Piece {
        Piece(self.0 | MOVED_BIT)
    }

    /// This piece re-tagged as `kind`, keeping color and moved bits.
    /// Promotion uses this to turn the landed pawn into a queen.
    #[inline]
    #[must_use]
    pub(crate) const fn with_kind(self, kind: PieceKind) -> Piece {
        Piece((self.0 & !KIND_MASK) | kind as u8)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}
