//! # Bingo Board
//!
//! A 5×5 bingo game played in the terminal. Players fill the board with their
//! own entries, which land on random squares, then mark squares until a row,
//! column or diagonal is complete. The board is saved after every change and
//! restored on the next start.
//!
//! ## Modules
//!
//! - [`game`] — Board, win lines, and the game that owns and saves the board
//! - [`storage`] — Board persistence: JSON file and in-memory stores
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File logging through `tracing`
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod storage;
pub mod ui;
