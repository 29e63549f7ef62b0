//! Terminal rendering of the board together with each side's losses.

use std::fmt;

use tabula_core::{Board, Color};

/// Board framed by the captured-pieces row of each side.
///
/// Black's row is printed above the board and White's below it, matching
/// the orientation of the board itself.
pub struct GameView<'a>(pub &'a Board);

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "{} : {}", Color::Black, CapturedRow(board, Color::Black))?;
        writeln!(f, "{}", board.pretty())?;
        write!(f, "{} : {}", Color::White, CapturedRow(board, Color::White))
    }
}

/// One slot per piece of a roster: `-` while alive, its letter once captured.
pub struct CapturedRow<'a>(pub &'a Board, pub Color);

impl fmt::Display for CapturedRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (board, color) = (self.0, self.1);
        write!(f, "[")?;
        for (i, piece) in board.roster(color).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if piece.is_alive() {
                write!(f, "-")?;
            } else {
                write!(f, "{}", piece.symbol())?;
            }
        }
        write!(f, "]")
    }
}
