use crate::game::{Board, Line, Phase, ENTRIES_TO_START};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use super::board_widget::{self, Highlight};

/// Everything the screen shows for one frame.
pub struct GameView<'a> {
    pub board: &'a Board,
    pub phase: Phase,
    pub entries: usize,
    pub highlight: Highlight,
    pub input: &'a TextArea<'static>,
    pub message: Option<&'a str>,
    pub bingo_lines: Option<&'a [Line]>,
}

/// Draw the screen and return the grid rectangle used for mouse hit-testing.
pub fn render(frame: &mut Frame, view: &GameView) -> Rect {
    let input_height = match view.phase {
        Phase::Filling => 3,
        Phase::Playing => 0,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Min(board_widget::GRID_HEIGHT), // Board
            Constraint::Length(input_height),           // Entry input
            Constraint::Length(3),                      // Message
            Constraint::Length(3),                      // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let grid = board_widget::grid_area(chunks[1]);
    board_widget::render_board(frame, view.board, grid, &view.highlight);
    if view.phase == Phase::Filling {
        frame.render_widget(view.input, chunks[2]);
    }
    render_message(frame, view.message, chunks[3]);
    render_controls(frame, view.phase, chunks[4]);

    if let Some(lines) = view.bingo_lines {
        render_bingo_popup(frame, lines);
    }

    grid
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let (status, color) = match view.phase {
        Phase::Filling => ("Add entries to fill the board", Color::Cyan),
        Phase::Playing => ("Select squares to complete a line", Color::Green),
    };
    let header = Paragraph::new(TextLine::from(vec![
        Span::styled(
            format!("Entries: {} / {}", view.entries, ENTRIES_TO_START),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(status, Style::default().fg(color)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Bingo"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, phase: Phase, area: Rect) {
    let text = match phase {
        Phase::Filling => "Type an entry  |  Enter: Add  |  Ctrl+R: New board  |  Esc: Quit",
        Phase::Playing => {
            "Arrows: Move  |  Enter/Space/Click: Select  |  Ctrl+R: New board  |  Q/Esc: Quit"
        }
    };
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_bingo_popup(frame: &mut Frame, lines: &[Line]) {
    let mut text = vec![
        TextLine::from(Span::styled(
            "BINGO!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    text.extend(lines.iter().map(|line| TextLine::from(line.name())));
    text.push(TextLine::from(""));
    text.push(TextLine::from(Span::styled(
        "Press any key for a new board",
        Style::default().fg(Color::DarkGray),
    )));

    let area = centered(frame.area(), 36, text.len() as u16 + 2);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
