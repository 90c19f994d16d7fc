use rand::rngs::StdRng;
use rand::Rng;

use super::board::{Board, Line, Position};
use crate::error::{GameError, StorageError};
use crate::storage::BoardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting entries; the board still has empty squares.
    Filling,
    /// Board is full; squares can be selected.
    Playing,
}

/// Result of selecting a square while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Toggled { selected: bool },
    /// The selection completed at least one line. `board` is the winning
    /// board; the game itself has already been reset.
    Bingo { lines: Vec<Line>, board: Board },
}

/// What a selection did, plus any failure to save the resulting board.
///
/// A save failure never hides the outcome: the in-memory board has already
/// changed and stays authoritative.
#[derive(Debug)]
pub struct Selection {
    pub outcome: SelectOutcome,
    pub save_error: Option<StorageError>,
}

/// Owns the board and writes every change through to a [`BoardStore`].
pub struct BingoGame {
    board: Board,
    store: Box<dyn BoardStore>,
    rng: StdRng,
}

impl BingoGame {
    /// Start from the board saved in `store`, or a fresh board when the slot is
    /// empty or unreadable.
    pub fn load(store: Box<dyn BoardStore>, rng: StdRng) -> Self {
        let board = match store.load() {
            Ok(Some(board)) => {
                tracing::info!(
                    location = %store.location(),
                    entries = board.entry_count(),
                    "restored saved board"
                );
                board
            }
            Ok(None) => {
                tracing::info!(location = %store.location(), "no saved board, starting fresh");
                Board::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable saved board");
                Board::new()
            }
        };
        BingoGame { board, store, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        if self.is_ready() {
            Phase::Playing
        } else {
            Phase::Filling
        }
    }

    /// Player entries on the board, the free space excluded.
    pub fn entry_count(&self) -> usize {
        self.board.entry_count()
    }

    pub fn is_ready(&self) -> bool {
        self.board.is_ready()
    }

    /// Place `text` in a uniformly random empty square and save the board.
    ///
    /// Surrounding whitespace is trimmed. On a storage error the entry stays on
    /// the in-memory board.
    pub fn insert(&mut self, text: &str) -> Result<Position, GameError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GameError::EmptyEntry);
        }
        let empty = self.board.empty_positions();
        if empty.is_empty() {
            return Err(GameError::BoardFull);
        }
        let pos = empty[self.rng.random_range(0..empty.len())];
        self.board.place(pos, text)?;
        tracing::debug!(row = pos.row, col = pos.col, entries = self.entry_count(), "entry added");
        if self.is_ready() {
            tracing::info!("board full, ready to play");
        }
        self.persist()?;
        Ok(pos)
    }

    /// Flip the selection of a filled, non-free square and save the board.
    pub fn toggle_select(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let selected = self.board.toggle(row, col)?;
        tracing::debug!(row, col, selected, "square toggled");
        self.persist()?;
        Ok(selected)
    }

    pub fn check_win(&self) -> bool {
        self.board.check_win()
    }

    pub fn winning_lines(&self) -> Vec<Line> {
        self.board.winning_lines()
    }

    /// Replace the board with a fresh one and save it.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.board = Board::new();
        tracing::info!("board reset");
        Ok(self.persist()?)
    }

    /// Select a square during play: toggle it, then reset the game if that
    /// completed a line.
    ///
    /// The outcome is decided on the in-memory board before anything is saved,
    /// so a storage failure is reported in [`Selection::save_error`] alongside
    /// it. Only squares that cannot be selected return an error.
    pub fn select(&mut self, row: usize, col: usize) -> Result<Selection, GameError> {
        if self.phase() != Phase::Playing {
            return Err(GameError::NotPlaying);
        }
        let selected = self.board.toggle(row, col)?;
        tracing::debug!(row, col, selected, "square toggled");

        let lines = self.winning_lines();
        let outcome = if lines.is_empty() {
            SelectOutcome::Toggled { selected }
        } else {
            tracing::info!(lines = ?lines, "bingo");
            let board = std::mem::take(&mut self.board);
            tracing::info!("board reset");
            SelectOutcome::Bingo { lines, board }
        };

        Ok(Selection {
            outcome,
            save_error: self.persist().err(),
        })
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.store.save(&self.board).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to save board");
        })
    }
}
