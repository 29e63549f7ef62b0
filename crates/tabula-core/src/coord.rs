//! Board coordinates and displacement vectors.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Board width and height.
pub const BOARD_SIZE: i8 = 8;

/// An integer pair used both for board cells and for displacements.
///
/// `x` is the file (0 = a, 7 = h). `y` is the row, counted from the top of
/// the board as White sees it: row 0 is rank 8 and row 7 is rank 1.
/// Displacements may hold any value; cells are in `0..8` on both axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    /// The zero vector.
    pub const ZERO: Coord = Coord::new(0, 0);

    /// Create a coordinate from its components.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Coord {
        Coord { x, y }
    }

    /// Return `true` if both components lie on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Multiply both components by `k`.
    #[inline]
    pub const fn scale(self, k: i8) -> Coord {
        Coord::new(self.x * k, self.y * k)
    }

    /// Multiply component by component.
    #[inline]
    pub const fn component_mul(self, other: Coord) -> Coord {
        Coord::new(self.x * other.x, self.y * other.y)
    }

    /// Walk `steps` times along `direction`, starting one step away from `self`.
    ///
    /// The origin itself is never yielded. The returned iterator is `Clone`,
    /// so a walk can be restarted from any saved copy.
    #[inline]
    pub fn walk(self, direction: Coord, steps: u8) -> Walk {
        Walk {
            current: self,
            direction,
            remaining: steps,
        }
    }

    /// Parse a square name such as `"e2"`.
    ///
    /// Letters `a`-`h` map to `x` 0-7 and digits `1`-`8` map to `y` 7-0.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let x = (file_byte - b'a') as i8;
        let y = BOARD_SIZE - (rank_byte - b'0') as i8;
        Some(Coord::new(x, y))
    }

    /// Iterate over all 64 cells, row by row from the top-left corner (a8).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, k: i8) -> Coord {
        self.scale(k)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl From<(i8, i8)> for Coord {
    #[inline]
    fn from((x, y): (i8, i8)) -> Coord {
        Coord::new(x, y)
    }
}

/// Square name for on-board cells, `(x, y)` for anything else.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, BOARD_SIZE - self.y)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

/// Lazy sequence of cells produced by [`Coord::walk`].
#[derive(Debug, Clone)]
pub struct Walk {
    current: Coord,
    direction: Coord,
    remaining: u8,
}

impl Iterator for Walk {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current + self.direction;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Walk {}
