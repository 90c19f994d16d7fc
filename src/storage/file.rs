use std::fs;
use std::path::{Path, PathBuf};

use super::BoardStore;
use crate::error::StorageError;
use crate::game::Board;

/// Stores the board as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        FileStore {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStore for FileStore {
    fn load(&self) -> Result<Option<Board>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        // A literal `null` is an empty slot, not corruption.
        serde_json::from_str::<Option<Board>>(&json).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&mut self, board: &Board) -> Result<(), StorageError> {
        let write_err = |e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let json = serde_json::to_string(board)?;

        // Atomic replace
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_missing_file_is_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "bingo-board");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path(), "bingo-board");
        let mut board = Board::new();
        board.place(Position::new(3, 1), "printer jam").unwrap();
        board.toggle(3, 1).unwrap();

        store.save(&board).unwrap();
        assert_eq!(store.path(), dir.path().join("bingo-board.json"));
        assert_eq!(store.load().unwrap(), Some(board));
        assert!(!dir.path().join("bingo-board.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("bingo");
        let mut store = FileStore::new(&nested, "board");
        store.save(&Board::new()).unwrap();
        assert!(nested.join("board.json").exists());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path(), "bingo-board");
        let mut board = Board::new();
        store.save(&board).unwrap();
        board.place(Position::new(0, 0), "second").unwrap();
        store.save(&board).unwrap();
        assert_eq!(store.load().unwrap().unwrap().filled_count(), 2);
    }

    #[test]
    fn test_null_blob_is_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bingo-board.json"), "null").unwrap();
        let store = FileStore::new(dir.path(), "bingo-board");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_blob_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bingo-board.json"), "{not json").unwrap();
        let store = FileStore::new(dir.path(), "bingo-board");
        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();
        let mut store = FileStore::new(&blocker, "bingo-board");
        assert!(matches!(
            store.save(&Board::new()),
            Err(StorageError::Write { .. })
        ));
    }
}
