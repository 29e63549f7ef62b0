//! Error type for rejected moves and undo requests.

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// Why a move or undo request was refused.
///
/// Every variant is recoverable: the board is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The origin square is empty.
    #[error("no piece on {at}")]
    NoPieceAtOrigin {
        /// The empty square.
        at: Coord,
    },
    /// The piece at the origin belongs to the side not on move.
    #[error("{expected} is playing, cannot move a {found} piece")]
    WrongColor {
        /// Side to move.
        expected: Color,
        /// Color of the piece found at the origin.
        found: Color,
    },
    /// No move template of the piece matches the requested displacement.
    #[error(
        "{color} {kind} can't do ({dx}, {dy}) move",
        dx = .displacement.x,
        dy = .displacement.y
    )]
    NoSuchMove {
        /// Color of the moving piece.
        color: Color,
        /// Kind of the moving piece.
        kind: PieceKind,
        /// Requested displacement.
        displacement: Coord,
    },
    /// The origin or the destination lies outside the board.
    #[error("{at} is outside the board")]
    OutOfBounds {
        /// The offending coordinate.
        at: Coord,
    },
    /// A square strictly between origin and destination is occupied.
    #[error("path is blocked at {at}")]
    BlockedPath {
        /// First occupied intermediate square.
        at: Coord,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{at} is occupied by a piece of the same color")]
    OccupiedBySelf {
        /// The destination square.
        at: Coord,
    },
    /// The move is only legal as a capture and the destination holds no enemy.
    #[error("this move must capture an enemy piece on {at}")]
    MustCapture {
        /// The destination square.
        at: Coord,
    },
    /// The move may not capture and the destination is occupied.
    #[error("this move cannot capture on {at}")]
    CannotCaptureHere {
        /// The destination square.
        at: Coord,
    },
    /// A first-move-only template was requested for a piece that has moved.
    #[error("forbidden once the piece has moved")]
    AlreadyMoved,
    /// Castling was requested after the king has moved.
    #[error("can't castle once the king has moved")]
    KingHasMoved,
    /// The castling corner does not hold an unmoved rook of the king's color.
    #[error("castling needs an unmoved rook on {corner}")]
    InvalidCastlingPartner {
        /// The corner where the rook was expected.
        corner: Coord,
    },
    /// A piece was about to be placed on a square held by a live piece.
    #[error("{at} is held by an active piece")]
    OccupiedByActivePiece {
        /// The target square.
        at: Coord,
    },
    /// Undo was requested with no move on record.
    #[error("nothing to undo")]
    NothingToUndo,
}
