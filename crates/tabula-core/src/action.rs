//! Reversible board mutations.
//!
//! An [`Action`] names a forward primitive of the board together with its
//! arguments. Applying it returns an [`Undo`] record holding exactly the
//! arguments of the matching inverse primitive. Actions are grouped into an
//! [`ActionBatch`] so that every primitive mutation caused by one chess move
//! is applied in order and reverted in reverse order as a unit.

use crate::board::Board;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece::PieceId;

/// A forward primitive mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move `piece` from wherever it stands to `to`.
    MovePiece { piece: PieceId, to: Coord },
    /// Capture `piece`, lifting it off the grid.
    KillPiece { piece: PieceId },
}

/// What an applied [`Action`] needs to revert itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undo {
    MovePiece {
        piece: PieceId,
        from: Coord,
        to: Coord,
        /// Occupant of `to` before the move, restored on revert.
        previous: Option<PieceId>,
    },
    KillPiece {
        piece: PieceId,
        at: Coord,
    },
}

impl Action {
    /// Perform the action and return its undo record.
    pub(crate) fn apply(self, board: &mut Board) -> Result<Undo, MoveError> {
        match self {
            Action::MovePiece { piece, to } => board.place_piece(piece, to),
            Action::KillPiece { piece } => board.kill_piece(piece),
        }
    }
}

impl Undo {
    /// Revert the action this record was produced by.
    pub(crate) fn unapply(self, board: &mut Board) {
        match self {
            Undo::MovePiece {
                piece,
                from,
                to,
                previous,
            } => board.unplace_piece(piece, from, to, previous),
            Undo::KillPiece { piece, at } => board.revive_piece(piece, at),
        }
    }
}

/// Ordered actions making up one chess move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBatch {
    actions: Vec<Action>,
}

impl ActionBatch {
    pub fn new() -> ActionBatch {
        ActionBatch::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Apply every action in order.
    ///
    /// If one fails, the actions already applied are reverted before the
    /// error is returned, so the board is left as it was.
    pub(crate) fn apply(self, board: &mut Board) -> Result<AppliedBatch, MoveError> {
        let mut applied = AppliedBatch {
            undos: Vec::with_capacity(self.actions.len()),
        };
        for action in self.actions {
            match action.apply(board) {
                Ok(undo) => applied.undos.push(undo),
                Err(err) => {
                    applied.unapply(board);
                    return Err(err);
                }
            }
        }
        Ok(applied)
    }
}

/// Undo records of a batch that has been applied to a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedBatch {
    undos: Vec<Undo>,
}

impl AppliedBatch {
    /// The undo records in application order.
    pub fn undos(&self) -> &[Undo] {
        &self.undos
    }

    /// Revert every action, last applied first.
    pub(crate) fn unapply(self, board: &mut Board) {
        for undo in self.undos.into_iter().rev() {
            undo.unapply(board);
        }
    }
}
