//! Move history kept in a plain-text file, one `<from> <to>` line per move.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use tabula_core::{Board, Coord};

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// Moves played so far, mirrored to a file when a path is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    path: Option<PathBuf>,
    moves: Vec<(Coord, Coord)>,
}

impl History {
    /// Start an empty history. The file, if any, is only written on change.
    pub fn new(path: Option<PathBuf>) -> History {
        History {
            path,
            moves: Vec::new(),
        }
    }

    /// Read the moves stored at `path`. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<History, CliError> {
        let mut history = History::new(Some(path.to_path_buf()));
        if !path.exists() {
            return Ok(history);
        }

        for line in fs::read_to_string(path)?.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(line)? {
                Command::Move { from, to } => history.moves.push((from, to)),
                _ => {
                    return Err(CliError::MalformedCommand {
                        input: line.to_string(),
                    });
                }
            }
        }
        debug!(path = %path.display(), moves = history.moves.len(), "history loaded");
        Ok(history)
    }

    /// Recorded moves, oldest first.
    pub fn moves(&self) -> &[(Coord, Coord)] {
        &self.moves
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Play every recorded move on `board`, stopping at the first refusal.
    pub fn replay(&self, board: &mut Board) -> Result<(), CliError> {
        for (index, &(from, to)) in self.moves.iter().enumerate() {
            board
                .play(from, to)
                .map_err(|source| CliError::Replay {
                    line: index + 1,
                    source,
                })?;
        }
        debug!(moves = self.moves.len(), "history replayed");
        Ok(())
    }

    /// Append a successfully played move.
    pub fn record(&mut self, from: Coord, to: Coord) -> Result<(), CliError> {
        self.moves.push((from, to));
        self.save()
    }

    /// Drop the last move after an undo.
    pub fn pop(&mut self) -> Result<Option<(Coord, Coord)>, CliError> {
        let last = self.moves.pop();
        self.save()?;
        Ok(last)
    }

    /// Rewrite the whole file from the in-memory list.
    pub fn save(&self) -> Result<(), CliError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text: String = self
            .moves
            .iter()
            .map(|(from, to)| format!("{from} {to}\n"))
            .collect();
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::History;
    use crate::error::CliError;
    use tabula_core::{Board, Color, Coord, MoveError};

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tabula-{}-{name}", std::process::id()))
    }

    #[test]
    fn file_roundtrip() {
        let path = temp_path("roundtrip.txt");
        let mut history = History::new(Some(path.clone()));
        history.record(sq("a2"), sq("a4")).unwrap();
        history.record(sq("b7"), sq("b5")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a2 a4\nb7 b5\n");

        assert_eq!(history.pop().unwrap(), Some((sq("b7"), sq("b5"))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a2 a4\n");

        let loaded = History::load(&path).unwrap();
        assert_eq!(loaded.moves(), &[(sq("a2"), sq("a4"))]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_empty() {
        let history = History::load(&temp_path("does-not-exist.txt")).unwrap();
        assert!(history.moves().is_empty());
    }

    #[test]
    fn replay_plays_moves() {
        let path = temp_path("replay.txt");
        fs::write(&path, "a2 a4\n\nb7 b5\na4 b5\n").unwrap();

        let history = History::load(&path).unwrap();
        let mut board = Board::new();
        history.replay(&mut board).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.captured(Color::Black).count(), 1);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn replay_reports_failing_line() {
        let path = temp_path("bad-replay.txt");
        fs::write(&path, "e2 e4\ne4 e5\n").unwrap();

        let history = History::load(&path).unwrap();
        let err = history.replay(&mut Board::new()).unwrap_err();
        match err {
            CliError::Replay { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, MoveError::WrongColor { .. }));
            }
            other => panic!("expected Replay, got {other:?}"),
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_move_line_is_rejected() {
        let path = temp_path("undo-line.txt");
        fs::write(&path, "undo\n").unwrap();
        assert!(matches!(
            History::load(&path),
            Err(CliError::MalformedCommand { .. })
        ));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn no_path_never_touches_disk() {
        let mut history = History::new(None);
        history.record(sq("e2"), sq("e4")).unwrap();
        assert!(history.path().is_none());
        assert_eq!(history.moves().len(), 1);
    }
}
