//! Parsing of interactive commands such as `a2 a4`.

use tabula_core::Coord;

use crate::error::CliError;

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `<from> <to>` -- play a move, e.g. `e2 e4`.
    Move { from: Coord, to: Coord },
    /// `undo` -- take back the last move.
    Undo,
    /// `board` -- print the board again.
    Show,
    /// `help` -- list the commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
}

/// One-line usage summary printed by `help`.
pub const HELP: &str = "moves: '<from> <to>' such as 'a2 a4' | undo | board | help | quit";

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["q" | "quit" | "s" | "stop"] => Ok(Command::Quit),
        ["u" | "undo"] => Ok(Command::Undo),
        ["board" | "show"] => Ok(Command::Show),
        ["help" | "?"] => Ok(Command::Help),
        [from, to] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        }),
        _ => Err(CliError::MalformedCommand {
            input: line.trim().to_string(),
        }),
    }
}

/// Parse a square name like `e2`.
pub fn parse_square(token: &str) -> Result<Coord, CliError> {
    Coord::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        input: token.to_string(),
    })
}
