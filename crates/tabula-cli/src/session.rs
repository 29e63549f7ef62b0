//! Read-eval-print loop driving one game.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use tabula_core::{Board, Coord};

use crate::command::{Command, HELP, parse_command};
use crate::error::CliError;
use crate::history::History;
use crate::render::GameView;

/// Settings for a [`Session`], filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// File mirroring the moves played; `None` keeps history in memory only.
    pub history_path: Option<PathBuf>,
    /// Replay the existing history file before accepting input.
    pub replay: bool,
    /// Print the board after every successful move or undo.
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_path: Some(PathBuf::from("history.txt")),
            replay: false,
            show_board: true,
        }
    }
}

/// One interactive game: a board plus its history file.
pub struct Session {
    board: Board,
    history: History,
    config: SessionConfig,
}

impl Session {
    /// Set up a fresh board, replaying the history file if asked to.
    ///
    /// Without replay the history file is truncated.
    pub fn new(config: SessionConfig) -> Result<Self, CliError> {
        let mut board = Board::new();
        let history = match (&config.history_path, config.replay) {
            (Some(path), true) => {
                let history = History::load(path)?;
                history.replay(&mut board)?;
                info!(moves = history.moves().len(), "history replayed");
                history
            }
            (path, _) => {
                let history = History::new(path.clone());
                history.save()?;
                history
            }
        };
        Ok(Self {
            board,
            history,
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Rejected moves and unreadable lines are reported on `output` and the
    /// player is prompted again; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), CliError> {
        writeln!(output, "++++ WELCOME TO CHESS ++++")?;
        writeln!(output, "{HELP}")?;
        self.show(&mut output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "\n{} is playing: ", self.board.side_to_move())?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            debug!(line = %line.trim(), "received command");

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "unreadable command");
                    writeln!(output, "invalid move: {e}")?;
                }
            }
        }

        info!(moves = self.board.history_len(), "session finished");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::Move { from, to } => self.handle_move(from, to, output),
            Command::Undo => self.handle_undo(output),
            Command::Show => self.show(output),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn handle_move<W: Write>(
        &mut self,
        from: Coord,
        to: Coord,
        output: &mut W,
    ) -> Result<(), CliError> {
        match self.board.play(from, to) {
            Ok(()) => {
                self.history.record(from, to)?;
                if self.config.show_board {
                    self.show(output)?;
                }
            }
            Err(e) => {
                warn!(%from, %to, error = %e, "move rejected");
                writeln!(output, "invalid move: {e}")?;
            }
        }
        Ok(())
    }

    fn handle_undo<W: Write>(&mut self, output: &mut W) -> Result<(), CliError> {
        match self.board.undo() {
            Ok(()) => {
                self.history.pop()?;
                if self.config.show_board {
                    self.show(output)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "undo rejected");
                writeln!(output, "invalid move: {e}")?;
            }
        }
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        writeln!(output, "\n{}", GameView(&self.board))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::{Session, SessionConfig};
    use tabula_core::{Board, Color, Coord};

    fn in_memory() -> SessionConfig {
        SessionConfig {
            history_path: None,
            replay: false,
            show_board: false,
        }
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.history_path.as_deref(), Some(std::path::Path::new("history.txt")));
        assert!(!config.replay);
        assert!(config.show_board);
    }

    #[test]
    fn plays_and_undoes() {
        let mut session = Session::new(in_memory()).unwrap();
        let out = run(&mut session, "a2 a4\nb7 b5\na4 b5\nundo\nundo\nundo\nquit\n");

        assert_eq!(session.board(), &Board::new());
        assert!(session.history().moves().is_empty());
        assert!(out.contains("White is playing"));
        assert!(out.contains("Black is playing"));
        assert!(!out.contains("invalid move"));
    }

    #[test]
    fn reports_errors_and_keeps_going() {
        let mut session = Session::new(in_memory()).unwrap();
        let out = run(&mut session, "e2\nundo\ne2 e5\na1 a8\ne2 e4\n");

        assert!(out.contains("invalid move: can't read move \"e2\""));
        assert!(out.contains("invalid move: nothing to undo"));
        assert!(out.contains("invalid move: White pawn can't do (0, -3) move"));
        assert!(out.contains("invalid move: path is blocked at a2"));
        assert_eq!(session.board().side_to_move(), Color::Black);
        assert_eq!(session.board().history_len(), 1);
    }

    #[test]
    fn stops_at_quit() {
        let mut session = Session::new(in_memory()).unwrap();
        run(&mut session, "e2 e4\nq\ne7 e5\n");
        assert_eq!(session.board().history_len(), 1);
    }

    #[test]
    fn show_prints_captured_rows() {
        let mut session = Session::new(in_memory()).unwrap();
        let out = run(&mut session, "board\n");
        assert!(out.contains("Black : ["));
        assert!(out.contains("1  R N B Q K B N R"));
    }

    #[test]
    fn history_file_is_written_and_replayed() {
        let path = std::env::temp_dir().join(format!("tabula-{}-session.txt", std::process::id()));
        let config = SessionConfig {
            history_path: Some(path.clone()),
            replay: false,
            show_board: true,
        };

        let mut session = Session::new(config.clone()).unwrap();
        run(&mut session, "e2 e4\ne7 e5\ng1 f3\nundo\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "e2 e4\ne7 e5\n");

        let replayed = Session::new(SessionConfig {
            replay: true,
            ..config
        })
        .unwrap();
        assert_eq!(replayed.board().side_to_move(), Color::White);
        let e4 = Coord::from_algebraic("e4").unwrap();
        assert_eq!(replayed.board().piece_at(e4).map(|p| p.color()), Some(Color::White));
        fs::remove_file(&path).unwrap();
    }
}
