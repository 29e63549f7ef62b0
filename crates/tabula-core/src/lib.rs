//! Core chess rules: board state, move legality, and reversible move application.

mod action;
mod board;
mod color;
mod coord;
mod error;
mod piece;
mod piece_kind;
mod rule;

pub use action::{Action, ActionBatch, AppliedBatch, Undo};
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use coord::{BOARD_SIZE, Coord, Walk};
pub use error::MoveError;
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use rule::{CastleSide, MoveRule, RuleKind};
