//! Interactive front-end errors.

use tabula_core::MoveError;

/// Errors that can occur while reading commands or the history file.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A move line did not consist of exactly two squares.
    #[error("can't read move \"{input}\" (needs 2 positions)")]
    MalformedCommand {
        /// The line as typed.
        input: String,
    },

    /// A square name could not be parsed.
    #[error("can't read position \"{input}\"")]
    InvalidSquare {
        /// The token that failed to parse.
        input: String,
    },

    /// A move from the history file was rejected while replaying it.
    #[error("history line {line}: {source}")]
    Replay {
        /// One-based line number in the history file.
        line: usize,
        /// Why the board refused the move.
        source: MoveError,
    },

    /// An I/O error occurred on the terminal or the history file.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
