use std::path::PathBuf;

/// Errors raised by board mutations. The terminal UI treats everything except
/// [`GameError::Storage`] as an ignorable no-op.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("entry text is empty")]
    EmptyEntry,

    #[error("the board is already full")]
    BoardFull,

    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("square ({row}, {col}) is already filled")]
    Occupied { row: usize, col: usize },

    #[error("square ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },

    #[error("the free space cannot be changed")]
    FreeSpace,

    #[error("the board must be full before squares can be selected")]
    NotPlaying,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from reading or writing the saved board.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read board from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write board to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("saved board at {path} is corrupted: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A deserialized grid that cannot be a bingo board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardShapeError {
    #[error("board has {0} rows (expected at most 5)")]
    TooManyRows(usize),

    #[error("row {row} has {len} squares (expected at most 5)")]
    TooManyColumns { row: usize, len: usize },

    #[error("center square is not the free space")]
    MissingFreeSpace,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::EmptyCell { row: 0, col: 3 };
        assert_eq!(err.to_string(), "square (0, 3) is empty");
    }

    #[test]
    fn test_storage_error_wraps_into_game_error() {
        let err: GameError = StorageError::Write {
            path: PathBuf::from("boards/bingo-board.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "storage error: failed to write board to boards/bingo-board.json: denied"
        );
    }

    #[test]
    fn test_board_shape_error_display() {
        let err = BoardShapeError::TooManyColumns { row: 2, len: 7 };
        assert_eq!(err.to_string(), "row 2 has 7 squares (expected at most 5)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("storage.key must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: storage.key must not be empty"
        );
    }
}
