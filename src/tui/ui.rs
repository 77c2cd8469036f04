//! Stateless UI rendering for the puzzle board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::puzzle::{Point, TilePlacement};

use super::app::App;

/// Terminal columns per tile.
pub(crate) const TILE_COLS: u16 = 8;
/// Terminal rows per tile.
pub(crate) const TILE_ROWS: u16 = 4;

/// Renders the full frame: title, board, status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = layout(frame.area());

    // Title
    let title = Paragraph::new("Sliding Tiles")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Board
    draw_board(frame, chunks[1], app);

    // Status
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Splits the frame into title/board/status rows. Shared with the event
/// loop so mouse coordinates map through the same geometry that was
/// drawn.
pub(crate) fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(TILE_ROWS),
            Constraint::Length(3),
        ])
        .split(area)
}

/// The on-screen rect occupied by the board for a given frame area.
pub(crate) fn board_rect(area: Rect, dim: u16) -> Rect {
    let chunks = layout(area);
    center_rect(chunks[1], dim * TILE_COLS, dim * TILE_ROWS)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let dim = app.game().grid().dim();
    let board = center_rect(area, dim * TILE_COLS, dim * TILE_ROWS);

    // Tray background; the empty cell shows through.
    let tray = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(tray, board);

    let tile_width = app.game().config().tile_width();
    let canvas = tile_width * dim as f32;
    let won = app.is_won();
    for placement in app.game().placements() {
        draw_tile(frame, board, &placement, tile_width, canvas, won);
    }
}

fn draw_tile(
    frame: &mut Frame,
    board: Rect,
    placement: &TilePlacement,
    tile_width: f32,
    canvas: f32,
    won: bool,
) {
    let style = if placement.selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if won {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let rect = tile_rect(placement.center, tile_width, canvas, board);
    let label = Paragraph::new(format!("\n{}", placement.tile))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(label, rect);
}

/// Maps a continuous canvas-space tile center to terminal cells.
fn tile_rect(center: Point, tile_width: f32, canvas: f32, board: Rect) -> Rect {
    let left = (center.x - tile_width / 2.0) / canvas;
    let top = (center.y - tile_width / 2.0) / canvas;
    let x = board.x as f32 + left * board.width as f32;
    let y = board.y as f32 + top * board.height as f32;
    let rect = Rect::new(
        x.round().max(0.0) as u16,
        y.round().max(0.0) as u16,
        TILE_COLS,
        TILE_ROWS,
    );
    rect.intersection(board)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
