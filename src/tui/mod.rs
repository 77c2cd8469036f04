//! Terminal UI for Sliding Tiles.
//!
//! A thin presentation adapter over the puzzle core: crossterm mouse
//! capture supplies the pointer-down/move/up events, terminal cells are
//! mapped into the logical canvas pixel space the core operates in, and
//! every frame re-renders the derived tile placements.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use crate::config::GameConfig;
use crate::puzzle::Point;

use app::App;

/// Runs the terminal UI until the player quits.
///
/// A `seed` makes the scramble reproducible; otherwise the RNG is seeded
/// from entropy.
pub fn run(config: GameConfig, seed: Option<u64>) -> Result<()> {
    // Log to a file so tracing output does not corrupt the alternate
    // screen.
    let log_file = std::fs::File::create("sliding_tiles_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Sliding Tiles TUI");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    app.scramble(&mut rng);

    let res = run_app(&mut terminal, &mut app, &mut rng);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "UI loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rng: &mut StdRng,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll the win detector once per frame.
        app.refresh();

        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.restart(rng),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(app, mouse, area);
                }
                _ => {}
            }
        }
    }
}

/// Forwards one mouse event to the game, mapping terminal cells into the
/// canvas pixel space the core operates in.
fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    let dim = app.game().grid().dim();
    let canvas = app.game().config().tile_width() * dim as f32;
    let board = ui::board_rect(area, dim);
    let point = canvas_point(mouse.column, mouse.row, board, canvas);

    match (mouse.kind, point) {
        (MouseEventKind::Down(MouseButton::Left), Some(point)) => {
            app.game_mut().pointer_down(point);
        }
        (MouseEventKind::Drag(MouseButton::Left), Some(point)) => {
            app.game_mut().pointer_move(point);
        }
        (MouseEventKind::Up(MouseButton::Left), _) => {
            app.game_mut().pointer_up();
        }
        _ => {}
    }
}

/// Maps a terminal cell (its center) to canvas pixel coordinates.
/// Out-of-board cells map to out-of-canvas points, which the core
/// rejects on its own.
fn canvas_point(column: u16, row: u16, board: Rect, canvas: f32) -> Option<Point> {
    if board.width == 0 || board.height == 0 {
        return None;
    }
    let x = (column as f32 - board.x as f32 + 0.5) / board.width as f32 * canvas;
    let y = (row as f32 - board.y as f32 + 0.5) / board.height as f32 * canvas;
    Some(Point { x, y })
}
