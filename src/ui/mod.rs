//! Terminal UI: the bingo board, the entry box while filling, and the bingo
//! popup.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, BingoPopup};
