use crate::error::GameError;
use crate::game::{BingoGame, Board, Line, Phase, Position, SelectOutcome, CENTER, SIZE};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Terminal,
};
use std::io;
use tui_textarea::TextArea;

use super::board_widget::{self, Highlight};
use super::game_view::{self, GameView};

/// The board that just won, shown until the player dismisses it.
#[derive(Debug, Clone)]
pub struct BingoPopup {
    pub board: Board,
    pub lines: Vec<Line>,
}

pub struct App {
    game: BingoGame,
    input: TextArea<'static>,
    cursor: Position,
    hovered: Option<Position>,
    grid: Rect,
    bingo: Option<BingoPopup>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: BingoGame) -> Self {
        App {
            game,
            input: entry_input(),
            cursor: Position::new(CENTER, CENTER),
            hovered: None,
            grid: Rect::default(),
            bingo: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &BingoGame {
        &self.game
    }

    pub fn bingo(&self) -> Option<&BingoPopup> {
        self.bingo.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(std::time::Duration::from_millis(100))? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The bingo popup swallows the key that dismisses it
        if self.bingo.take().is_some() {
            return;
        }
        self.message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_board(),
            _ => match self.game.phase() {
                Phase::Filling => self.handle_filling_key(key),
                Phase::Playing => self.handle_playing_key(key),
            },
        }
    }

    fn handle_filling_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_entry();
        } else {
            self.input.input(key);
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let Position { row, col } = self.cursor;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.cursor.row = row.saturating_sub(1),
            KeyCode::Down => self.cursor.row = (row + 1).min(SIZE - 1),
            KeyCode::Left => self.cursor.col = col.saturating_sub(1),
            KeyCode::Right => self.cursor.col = (col + 1).min(SIZE - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_square(self.cursor),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) && self.bingo.take().is_some() {
            return;
        }
        if self.bingo.is_some() || self.game.phase() != Phase::Playing {
            self.hovered = None;
            return;
        }
        let target = board_widget::hit_test(self.grid, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.hovered = target,
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = target {
                    self.message = None;
                    self.cursor = pos;
                    self.select_square(pos);
                }
            }
            _ => {}
        }
    }

    /// Add the typed entry to a random empty square
    fn submit_entry(&mut self) {
        let text = self.input.lines().join(" ");
        self.input = entry_input();

        match self.game.insert(&text) {
            Ok(_) if self.game.is_ready() => {
                self.cursor = Position::new(CENTER, CENTER);
                self.message = Some("Board is full! Select squares to complete a line.".into());
            }
            Ok(_) | Err(GameError::EmptyEntry) => {}
            Err(GameError::Storage(err)) => {
                self.message = Some(format!("Entry added but not saved: {err}"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn select_square(&mut self, pos: Position) {
        // Empty squares and the free space don't react
        let Ok(selection) = self.game.select(pos.row, pos.col) else {
            return;
        };
        if let SelectOutcome::Bingo { lines, board } = selection.outcome {
            self.bingo = Some(BingoPopup { board, lines });
            self.cursor = Position::new(CENTER, CENTER);
            self.hovered = None;
        }
        if let Some(err) = selection.save_error {
            self.message = Some(format!("Could not save board: {err}"));
        }
    }

    fn new_board(&mut self) {
        self.input = entry_input();
        self.cursor = Position::new(CENTER, CENTER);
        self.hovered = None;
        self.message = Some(match self.game.reset() {
            Ok(()) => "New board started.".to_string(),
            Err(err) => format!("New board started but not saved: {err}"),
        });
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let playing = self.game.phase() == Phase::Playing;
        let view = match &self.bingo {
            Some(popup) => GameView {
                board: &popup.board,
                phase: Phase::Playing,
                entries: popup.board.entry_count(),
                highlight: Highlight {
                    lines: popup.lines.clone(),
                    ..Highlight::default()
                },
                input: &self.input,
                message: self.message.as_deref(),
                bingo_lines: Some(&popup.lines),
            },
            None => GameView {
                board: self.game.board(),
                phase: self.game.phase(),
                entries: self.game.entry_count(),
                highlight: Highlight {
                    cursor: playing.then_some(self.cursor),
                    hovered: self.hovered,
                    lines: Vec::new(),
                },
                input: &self.input,
                message: self.message.as_deref(),
                bingo_lines: None,
            },
        };
        self.grid = game_view::render(frame, &view);
    }
}

fn entry_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text("e.g. someone says \"circle back\"");
    input.set_cursor_line_style(Style::default());
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("New entry"),
    );
    input
}
