//! Core bingo logic: the 5×5 board, win lines, and the game that keeps the
//! board saved as it changes.

mod board;
mod state;

pub use board::{
    Board, Cell, Line, Position, Square, CENTER, ENTRIES_TO_START, FREE_SPACE_TEXT, SIZE,
};
pub use state::{BingoGame, Phase, SelectOutcome, Selection};
