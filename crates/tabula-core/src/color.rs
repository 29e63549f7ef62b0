//! Chess piece colors.

use std::fmt;
use std::ops::Not;

use crate::coord::Coord;

/// A chess piece color: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Unit vector pointing toward the opponent's side of the board.
    ///
    /// Row 0 is rank 8, so White advances toward decreasing rows.
    #[inline]
    pub const fn forward(self) -> Coord {
        match self {
            Color::White => Coord::new(0, -1),
            Color::Black => Coord::new(0, 1),
        }
    }

    /// Row holding this side's pieces (rooks, king, ...) at the start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row holding this side's pawns at the start.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
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
