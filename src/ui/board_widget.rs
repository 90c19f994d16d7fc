use crate::game::{Board, Line, Position, SIZE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub const CELL_WIDTH: u16 = 16;
pub const CELL_HEIGHT: u16 = 4;
pub const GRID_WIDTH: u16 = CELL_WIDTH * SIZE as u16;
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * SIZE as u16;

/// What to emphasize when drawing the board.
#[derive(Debug, Clone, Default)]
pub struct Highlight {
    pub cursor: Option<Position>,
    pub hovered: Option<Position>,
    pub lines: Vec<Line>,
}

/// The grid's rectangle, centered in `area` and clipped to fit.
pub fn grid_area(area: Rect) -> Rect {
    let width = GRID_WIDTH.min(area.width);
    let height = GRID_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Screen rectangle of one square, or `None` if it is clipped away entirely.
pub fn cell_area(grid: Rect, row: usize, col: usize) -> Option<Rect> {
    let rect = Rect::new(
        grid.x + col as u16 * CELL_WIDTH,
        grid.y + row as u16 * CELL_HEIGHT,
        CELL_WIDTH,
        CELL_HEIGHT,
    );
    let visible = rect.intersection(grid);
    (!visible.is_empty()).then_some(visible)
}

/// Map a terminal coordinate to the square under it.
pub fn hit_test(grid: Rect, x: u16, y: u16) -> Option<Position> {
    if x < grid.x || y < grid.y || x >= grid.right() || y >= grid.bottom() {
        return None;
    }
    let pos = Position::new(
        ((y - grid.y) / CELL_HEIGHT) as usize,
        ((x - grid.x) / CELL_WIDTH) as usize,
    );
    pos.in_bounds().then_some(pos)
}

pub fn render_board(frame: &mut Frame, board: &Board, grid: Rect, highlight: &Highlight) {
    for pos in Position::all() {
        let Some(area) = cell_area(grid, pos.row, pos.col) else {
            continue;
        };
        let square = board.get(pos.row, pos.col);
        let in_line = highlight.lines.iter().any(|line| line.contains(pos));

        let body = match square {
            _ if in_line => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Some(_) if pos.is_free_space() => Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            Some(sq) if sq.selected => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default().fg(Color::White),
            None => Style::default().fg(Color::DarkGray),
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        if highlight.cursor == Some(pos) {
            block = block
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Cyan));
        } else if highlight.hovered == Some(pos) {
            block = block.border_style(Style::default().fg(Color::LightCyan));
        }

        let text = square.map(|sq| sq.text.as_str()).unwrap_or("");
        let widget = Paragraph::new(text)
            .style(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(widget, area);
    }
}
