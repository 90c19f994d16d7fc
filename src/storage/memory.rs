use std::cell::RefCell;
use std::rc::Rc;

use super::BoardStore;
use crate::error::StorageError;
use crate::game::Board;

/// In-memory slot holding the serialized board.
///
/// Clones share the same slot, so a caller can hand one clone to the game and
/// keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw blob already in the slot.
    pub fn with_blob(json: impl Into<String>) -> Self {
        MemoryStore {
            slot: Rc::new(RefCell::new(Some(json.into()))),
        }
    }

    /// The last written JSON snapshot, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl BoardStore for MemoryStore {
    fn load(&self) -> Result<Option<Board>, StorageError> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(serde_json::from_str::<Option<Board>>(json)?),
            None => Ok(None),
        }
    }

    fn save(&mut self, board: &Board) -> Result<(), StorageError> {
        let json = serde_json::to_string(board)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slot() {
        let watcher = MemoryStore::new();
        let mut store = watcher.clone();
        assert!(watcher.snapshot().is_none());
        store.save(&Board::new()).unwrap();
        assert_eq!(watcher.load().unwrap(), Some(Board::new()));
    }

    #[test]
    fn test_bad_blob_is_error() {
        let store = MemoryStore::with_blob("[[1,2,3]]");
        assert!(matches!(store.load(), Err(StorageError::Json(_))));
    }
}
