//! Move templates: direction, step count and capture policy.
//!
//! A [`MoveRule`] knows how to validate itself against a [`Board`] and how
//! to turn itself into the [`ActionBatch`] that performs it. Validation never
//! mutates the board.

use crate::action::{Action, ActionBatch};
use crate::board::Board;
use crate::coord::{BOARD_SIZE, Coord};
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Unit vector from the king toward the castling rook.
    #[inline]
    pub const fn direction(self) -> Coord {
        match self {
            CastleSide::KingSide => Coord::new(1, 0),
            CastleSide::QueenSide => Coord::new(-1, 0),
        }
    }
}

/// Capture policy and special-case data of a move template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Destination may be empty or hold an enemy piece.
    Plain,
    /// Destination must hold an enemy piece.
    CaptureRequired,
    /// Destination must be empty.
    CaptureForbidden,
    /// Destination must be empty and the piece must never have moved.
    FirstMoveOnly,
    /// King and rook swap sides; never a capture.
    Castling {
        side: CastleSide,
        /// Square where the partner rook starts.
        corner: Coord,
        /// Number of steps from the king's home square to `corner`.
        corner_distance: u8,
    },
}

/// A candidate move of one piece: `steps` repetitions of `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRule {
    direction: Coord,
    steps: u8,
    kind: RuleKind,
}

impl MoveRule {
    /// Capture-optional move.
    pub const fn plain(direction: Coord, steps: u8) -> MoveRule {
        MoveRule {
            direction,
            steps,
            kind: RuleKind::Plain,
        }
    }

    /// Move that is only legal as a capture.
    pub const fn capture_required(direction: Coord, steps: u8) -> MoveRule {
        MoveRule {
            direction,
            steps,
            kind: RuleKind::CaptureRequired,
        }
    }

    /// Move that may never capture.
    pub const fn capture_forbidden(direction: Coord, steps: u8) -> MoveRule {
        MoveRule {
            direction,
            steps,
            kind: RuleKind::CaptureForbidden,
        }
    }

    /// Non-capturing move allowed only while the piece has never moved.
    pub const fn first_move_only(direction: Coord, steps: u8) -> MoveRule {
        MoveRule {
            direction,
            steps,
            kind: RuleKind::FirstMoveOnly,
        }
    }

    /// Castling for a king standing on `king_home`.
    ///
    /// The king travels two squares; the corner is found by walking from the
    /// home square toward the board edge.
    pub fn castling(side: CastleSide, king_home: Coord) -> MoveRule {
        let direction = side.direction();
        let mut corner = king_home;
        let mut corner_distance = 0;
        while corner.x > 0 && corner.x < BOARD_SIZE - 1 {
            corner = corner + direction;
            corner_distance += 1;
        }
        MoveRule {
            direction,
            steps: 2,
            kind: RuleKind::Castling {
                side,
                corner,
                corner_distance,
            },
        }
    }

    /// Unit direction of the move.
    #[inline]
    pub const fn direction(&self) -> Coord {
        self.direction
    }

    /// Number of times `direction` is applied.
    #[inline]
    pub const fn steps(&self) -> u8 {
        self.steps
    }

    /// Capture policy and special-case data.
    #[inline]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Total displacement, `direction * steps`.
    #[inline]
    pub const fn displacement(&self) -> Coord {
        self.direction.scale(self.steps as i8)
    }

    /// Return `true` for moves that stop being available once the piece moved.
    #[inline]
    pub const fn is_first_move_only(&self) -> bool {
        matches!(self.kind, RuleKind::FirstMoveOnly)
    }

    /// Return `true` for castling templates.
    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, RuleKind::Castling { .. })
    }

    /// Check whether `piece` may perform this move on `board`.
    ///
    /// Runs, in order: first-move guards, destination bounds, the path of
    /// intermediate squares, and the destination (or castling partner) rule.
    pub fn validate(&self, piece: &Piece, board: &Board) -> Result<(), MoveError> {
        let origin = piece.position();
        let destination = origin + self.displacement();

        match self.kind {
            RuleKind::FirstMoveOnly if piece.has_moved() => return Err(MoveError::AlreadyMoved),
            RuleKind::Castling { .. } if piece.has_moved() => return Err(MoveError::KingHasMoved),
            _ => {}
        }

        if !destination.is_on_board() {
            return Err(MoveError::OutOfBounds { at: destination });
        }

        match self.kind {
            RuleKind::Castling {
                corner,
                corner_distance,
                ..
            } => {
                check_path(board, origin, self.direction, corner_distance.saturating_sub(1))?;
                check_castling_partner(piece, board, corner)
            }
            _ => {
                check_path(board, origin, self.direction, self.steps.saturating_sub(1))?;
                self.check_destination(piece, board, destination)
            }
        }
    }

    /// Destination-occupancy rule for the non-castling variants.
    fn check_destination(
        &self,
        piece: &Piece,
        board: &Board,
        destination: Coord,
    ) -> Result<(), MoveError> {
        let occupant = board.piece_at(destination);
        let enemy = occupant.is_some_and(|other| other.color() != piece.color());

        match self.kind {
            RuleKind::Plain => match occupant {
                Some(other) if other.color() == piece.color() => {
                    Err(MoveError::OccupiedBySelf { at: destination })
                }
                _ => Ok(()),
            },
            RuleKind::CaptureRequired if enemy => Ok(()),
            RuleKind::CaptureRequired => Err(MoveError::MustCapture { at: destination }),
            RuleKind::CaptureForbidden | RuleKind::FirstMoveOnly => match occupant {
                Some(_) => Err(MoveError::CannotCaptureHere { at: destination }),
                None => Ok(()),
            },
            RuleKind::Castling { .. } => Ok(()),
        }
    }

    /// Build the primitive actions that perform this move.
    ///
    /// Call only after [`MoveRule::validate`] succeeded on the same board.
    pub fn create_batch(&self, piece: &Piece, board: &Board) -> Result<ActionBatch, MoveError> {
        let destination = piece.position() + self.displacement();
        let mut batch = ActionBatch::new();

        match self.kind {
            RuleKind::Castling { corner, .. } => {
                let rook = board
                    .piece_at(corner)
                    .ok_or(MoveError::InvalidCastlingPartner { corner })?;
                batch.push(Action::MovePiece {
                    piece: piece.id(),
                    to: destination,
                });
                batch.push(Action::MovePiece {
                    piece: rook.id(),
                    to: destination - self.direction,
                });
            }
            _ => {
                if let Some(victim) = board.piece_at(destination) {
                    batch.push(Action::KillPiece { piece: victim.id() });
                }
                batch.push(Action::MovePiece {
                    piece: piece.id(),
                    to: destination,
                });
            }
        }

        Ok(batch)
    }
}

/// Fail on the first occupied square among the `count` squares after `origin`.
fn check_path(board: &Board, origin: Coord, direction: Coord, count: u8) -> Result<(), MoveError> {
    match origin
        .walk(direction, count)
        .find(|&cell| board.piece_at(cell).is_some())
    {
        Some(at) => Err(MoveError::BlockedPath { at }),
        None => Ok(()),
    }
}

fn check_castling_partner(king: &Piece, board: &Board, corner: Coord) -> Result<(), MoveError> {
    match board.piece_at(corner) {
        Some(rook)
            if rook.kind() == PieceKind::Rook
                && rook.color() == king.color()
                && !rook.has_moved() =>
        {
            Ok(())
        }
        _ => Err(MoveError::InvalidCastlingPartner { corner }),
    }
}
