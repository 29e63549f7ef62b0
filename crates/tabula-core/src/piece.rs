//! Chess pieces and their move templates.

use std::fmt;

use crate::color::Color;
use crate::coord::{BOARD_SIZE, Coord};
use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::rule::{CastleSide, MoveRule};

const ORTHOGONAL: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, 0),
];

const DIAGONAL: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

const KNIGHT_JUMPS: [Coord; 8] = [
    Coord::new(2, 1),
    Coord::new(2, -1),
    Coord::new(-2, 1),
    Coord::new(-2, -1),
    Coord::new(1, 2),
    Coord::new(1, -2),
    Coord::new(-1, 2),
    Coord::new(-1, -2),
];

/// Handle of a piece inside a [`Board`](crate::board::Board).
///
/// Two pieces are the same piece only if their ids are equal, whatever
/// their kind, color or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u8);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index as u8)
    }

    /// Return the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One piece on (or captured from) the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    alive: bool,
    position: Coord,
    times_moved: u32,
    /// Fixed at creation from `color`.
    forward: Coord,
    moves: Vec<MoveRule>,
}

impl Piece {
    /// Create an unmoved, live piece standing on `position`.
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color, position: Coord) -> Piece {
        let forward = color.forward();
        Piece {
            id,
            kind,
            color,
            alive: true,
            position,
            times_moved: 0,
            forward,
            moves: templates(kind, forward, position),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Return `false` once the piece has been captured.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current square, or the square it was captured on.
    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Number of moves applied to this piece that have not been undone.
    #[inline]
    pub fn times_moved(&self) -> u32 {
        self.times_moved
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.times_moved > 0
    }

    /// Unit vector toward the opponent.
    #[inline]
    pub fn forward(&self) -> Coord {
        self.forward
    }

    /// All move templates of this piece.
    #[inline]
    pub fn moves(&self) -> &[MoveRule] {
        &self.moves
    }

    /// Letter used on the rendered board: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base,
            Color::Black => base.to_ascii_lowercase(),
        }
    }

    /// Find the template whose total displacement equals `displacement`.
    ///
    /// First-move-only templates are skipped once the piece has moved.
    pub fn resolve_move(&self, displacement: Coord) -> Result<&MoveRule, MoveError> {
        self.moves
            .iter()
            .filter(|rule| !(rule.is_first_move_only() && self.has_moved()))
            .find(|rule| rule.displacement() == displacement)
            .ok_or(MoveError::NoSuchMove {
                color: self.color,
                kind: self.kind,
                displacement,
            })
    }

    /// Record a move to `to`. No legality checks.
    pub(crate) fn apply_displacement(&mut self, to: Coord) {
        self.position = to;
        self.times_moved += 1;
    }

    /// Inverse of [`Piece::apply_displacement`].
    pub(crate) fn retract_displacement(&mut self, from: Coord) {
        self.position = from;
        self.times_moved = self.times_moved.saturating_sub(1);
    }

    pub(crate) fn mark_captured(&mut self) {
        self.alive = false;
    }

    pub(crate) fn revive(&mut self) {
        self.alive = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)?;
        if !self.alive {
            write!(f, " (captured)")?;
        }
        Ok(())
    }
}

/// Build the fixed template list for a piece of `kind`.
fn templates(kind: PieceKind, forward: Coord, home: Coord) -> Vec<MoveRule> {
    match kind {
        PieceKind::Pawn => vec![
            MoveRule::capture_forbidden(forward, 1),
            MoveRule::capture_required(forward + Coord::new(1, 0), 1),
            MoveRule::capture_required(forward + Coord::new(-1, 0), 1),
            MoveRule::first_move_only(forward, 2),
        ],
        PieceKind::Knight => KNIGHT_JUMPS
            .iter()
            .map(|&jump| MoveRule::plain(jump, 1))
            .collect(),
        PieceKind::Bishop => sliding(&DIAGONAL),
        PieceKind::Rook => sliding(&ORTHOGONAL),
        PieceKind::Queen => sliding(&[ORTHOGONAL, DIAGONAL].concat()),
        PieceKind::King => ORTHOGONAL
            .iter()
            .chain(DIAGONAL.iter())
            .map(|&step| MoveRule::plain(step, 1))
            .chain(CastleSide::ALL.map(|side| MoveRule::castling(side, home)))
            .collect(),
    }
}

/// One template per distance, so a blocked path fails at the first obstruction.
fn sliding(directions: &[Coord]) -> Vec<MoveRule> {
    directions
        .iter()
        .flat_map(|&direction| {
            (1..BOARD_SIZE as u8).map(move |steps| MoveRule::plain(direction, steps))
        })
        .collect()
}
