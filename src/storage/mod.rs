//! Board persistence: a single key-value slot holding the JSON board.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use crate::game::Board;

/// Default storage key for the saved board.
pub const DEFAULT_KEY: &str = "bingo-board";

/// A slot that holds the last saved snapshot of the board.
///
/// Every write replaces the whole snapshot; there are no partial updates.
pub trait BoardStore {
    /// Read the saved board. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Board>, StorageError>;

    /// Replace the saved snapshot with `board`.
    fn save(&mut self, board: &Board) -> Result<(), StorageError>;

    /// Where the board lives, for log messages.
    fn location(&self) -> String;
}
