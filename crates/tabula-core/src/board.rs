//! The chess board: piece arena, grid, side to move, and undo stack.

use std::fmt;

use tracing::debug;

use crate::action::{ActionBatch, AppliedBatch, Undo};
use crate::color::Color;
use crate::coord::{BOARD_SIZE, Coord};
use crate::error::MoveError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;

const SIZE: usize = BOARD_SIZE as usize;

/// Complete game state.
///
/// The board owns every piece ever created. The grid and the per-color
/// rosters only hold [`PieceId`] handles into that arena. Captured pieces
/// leave the grid but stay in their roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    /// Indexed `[y][x]`.
    grid: [[Option<PieceId>; SIZE]; SIZE],
    /// Piece ids per color, in creation order. Indexed by [`Color::index()`].
    rosters: [Vec<PieceId>; Color::COUNT],
    side_to_move: Color,
    /// One entry per applied move, most recent last.
    history: Vec<AppliedBatch>,
}

impl Board {
    /// Return the standard starting position with White to move.
    pub fn new() -> Board {
        let mut board = Board {
            pieces: Vec::with_capacity(32),
            grid: [[None; SIZE]; SIZE],
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            side_to_move: Color::White,
            history: Vec::new(),
        };
        for color in Color::ALL {
            for x in 0..BOARD_SIZE {
                board.add_piece(PieceKind::Pawn, color, Coord::new(x, color.pawn_row()));
            }
            for (x, kind) in (0..BOARD_SIZE).zip(PieceKind::BACK_ROW) {
                board.add_piece(kind, color, Coord::new(x, color.home_row()));
            }
        }
        board
    }

    fn add_piece(&mut self, kind: PieceKind, color: Color, at: Coord) {
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Piece::new(id, kind, color, at));
        self.rosters[color.index()].push(id);
        self.set_cell(at, Some(id));
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the piece standing on `at`, if any. Off-board cells are empty.
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.cell(at).map(|id| self.piece(id))
    }

    /// Return the piece behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Every piece of `color`, captured ones included, in creation order.
    pub fn roster(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.rosters[color.index()].iter().map(|&id| self.piece(id))
    }

    /// Pieces of `color` that have been captured.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.roster(color).filter(|piece| !piece.is_alive())
    }

    /// Number of moves that can be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check whether the side to move may play `from` to `to`.
    ///
    /// Returns the batch of actions the move would apply. The board is not
    /// modified.
    pub fn validate_move(&self, from: Coord, to: Coord) -> Result<ActionBatch, MoveError> {
        for at in [from, to] {
            if !at.is_on_board() {
                return Err(MoveError::OutOfBounds { at });
            }
        }
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtOrigin { at: from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongColor {
                expected: self.side_to_move,
                found: piece.color(),
            });
        }

        let rule = piece.resolve_move(to - from)?;
        rule.validate(piece, self)?;
        if rule.is_castling() {
            debug!(color = %self.side_to_move, %from, %to, "castling");
        }
        rule.create_batch(piece, self)
    }

    /// Play the move `from` to `to` for the side to move.
    ///
    /// On success the move is pushed on the undo stack and the turn passes.
    /// On failure the board is unchanged.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<(), MoveError> {
        let batch = self.validate_move(from, to)?;
        let applied = batch.apply(self)?;
        debug!(
            color = %self.side_to_move,
            %from,
            %to,
            actions = applied.undos().len(),
            "move applied"
        );
        self.history.push(applied);
        self.side_to_move = self.side_to_move.flip();
        Ok(())
    }

    /// Revert the most recent move and give the turn back to its player.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let applied = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        applied.unapply(self);
        self.side_to_move = self.side_to_move.flip();
        debug!(color = %self.side_to_move, remaining = self.history.len(), "move undone");
        Ok(())
    }

    #[inline]
    fn cell(&self, at: Coord) -> Option<PieceId> {
        if at.is_on_board() {
            self.grid[at.y as usize][at.x as usize]
        } else {
            None
        }
    }

    #[inline]
    fn set_cell(&mut self, at: Coord, id: Option<PieceId>) {
        if at.is_on_board() {
            self.grid[at.y as usize][at.x as usize] = id;
        }
    }

    #[inline]
    fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// Move `id` onto `to`, remembering whatever handle `to` held before.
    ///
    /// Refuses to cover a live piece; captures must kill first.
    pub(crate) fn place_piece(&mut self, id: PieceId, to: Coord) -> Result<Undo, MoveError> {
        if !to.is_on_board() {
            return Err(MoveError::OutOfBounds { at: to });
        }
        let previous = self.cell(to);
        if let Some(occupant) = previous
            && occupant != id
            && self.piece(occupant).is_alive()
        {
            return Err(MoveError::OccupiedByActivePiece { at: to });
        }

        let from = self.piece(id).position();
        self.set_cell(from, None);
        self.set_cell(to, Some(id));
        self.piece_mut(id).apply_displacement(to);
        Ok(Undo::MovePiece {
            piece: id,
            from,
            to,
            previous,
        })
    }

    /// Inverse of [`Board::place_piece`].
    pub(crate) fn unplace_piece(
        &mut self,
        id: PieceId,
        from: Coord,
        to: Coord,
        previous: Option<PieceId>,
    ) {
        self.set_cell(to, previous);
        self.set_cell(from, Some(id));
        self.piece_mut(id).retract_displacement(from);
    }

    /// Mark `id` as captured and lift it off the grid.
    pub(crate) fn kill_piece(&mut self, id: PieceId) -> Result<Undo, MoveError> {
        let at = self.piece(id).position();
        if self.cell(at) == Some(id) {
            self.set_cell(at, None);
        }
        self.piece_mut(id).mark_captured();
        Ok(Undo::KillPiece { piece: id, at })
    }

    /// Inverse of [`Board::kill_piece`].
    pub(crate) fn revive_piece(&mut self, id: PieceId, at: Coord) {
        self.piece_mut(id).revive();
        self.set_cell(at, Some(id));
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in 0..BOARD_SIZE {
            write!(f, "{}  ", BOARD_SIZE - y)?;
            for x in 0..BOARD_SIZE {
                let c = board
                    .piece_at(Coord::new(x, y))
                    .map_or('.', Piece::symbol);
                if x < BOARD_SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
