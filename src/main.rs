mod app;
mod board;
mod geometry;
mod history;
mod maps;
mod shapes;
mod tools;
mod ui;

use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Size;
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use board::Tool;
use maps::MapCatalog;
use shapes::MarkerKind;

/// Tactical map board - markers, freehand strokes, undo/redo
#[derive(Parser, Debug)]
#[command(name = "stratboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Map to open (catalog id, e.g. "ascent")
    #[arg(value_name = "MAP_ID")]
    map: Option<String>,

    /// Load the map catalog from this JSON file instead of the config dir
    #[arg(long, value_name = "FILE")]
    maps: Option<PathBuf>,

    /// Print the map catalog and exit
    #[arg(long)]
    list_maps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let catalog = match &args.maps {
        Some(path) => MapCatalog::load_from(path)?,
        None => MapCatalog::load(),
    };

    if args.list_maps {
        for map in catalog.iter() {
            println!("{:<12} {}", map.id, map.name);
        }
        return Ok(());
    }

    let initial_map = match &args.map {
        Some(id) => catalog
            .position(id)
            .with_context(|| format!("unknown map id '{}'", id))?,
        None => 0,
    };

    info!("starting stratboard with {} maps", catalog.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    app.selected_map = initial_map;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:?}", e);
    }

    Ok(())
}

/// Log to a file under the data dir; stdout belongs to the TUI.
fn init_logging() {
    let log_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local/share")
        })
        .join("stratboard");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("stratboard.log")) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut term_size = terminal.size()?;

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release {
                        handle_key(app, key);
                    }
                }
                Event::Mouse(mouse) => {
                    let panel_cols = if app.show_maps { ui::MAPS_PANEL_WIDTH } else { 0 };
                    let board_cols = term_size.width.saturating_sub(panel_cols);

                    // Pointer-down on the map panel picks a map; everything
                    // else (including drag/release that wanders over the
                    // panel) goes to the active tool.
                    if mouse.column >= board_cols
                        && matches!(mouse.kind, MouseEventKind::Down(_))
                    {
                        if mouse.row >= 1 {
                            app.select_map(mouse.row as usize - 1);
                        }
                    } else {
                        match app.board.tool() {
                            Tool::Move => tools::handle_select_event(app, mouse),
                            Tool::Draw => tools::handle_draw_event(app, mouse),
                            Tool::Marker(_) => tools::handle_marker_event(app, mouse),
                        }
                    }
                }
                Event::Resize(w, h) => {
                    term_size = Size::new(w, h);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Clear the previous status message on any keypress
    app.clear_status();

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if ctrl => app.running = false,
        KeyCode::Esc => app.board.end_gesture(),

        // Undo/Redo. Ctrl+Shift+Z arrives as 'z'+SHIFT or as 'Z' depending
        // on the terminal.
        KeyCode::Char('z') if ctrl => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.redo();
            } else {
                app.undo();
            }
        }
        KeyCode::Char('Z') if ctrl => app.redo(),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('U') => app.redo(),

        // Tool selection
        KeyCode::Char('m') => app.set_tool(Tool::Move),
        KeyCode::Char('d') => app.set_tool(Tool::Draw),
        KeyCode::Char('s') => app.set_tool(Tool::Marker(MarkerKind::Square)),
        KeyCode::Char('c') => app.set_tool(Tool::Marker(MarkerKind::Circle)),
        KeyCode::Char('t') => app.set_tool(Tool::Marker(MarkerKind::Triangle)),
        KeyCode::Char('w') => app.set_tool(Tool::Marker(MarkerKind::Warning)),
        KeyCode::Char('a') => app.set_tool(Tool::Marker(MarkerKind::Anchor)),
        KeyCode::Char('r') => app.set_tool(Tool::Marker(MarkerKind::Star)),

        KeyCode::Char('C') => app.cycle_color(),
        KeyCode::Char('x') => app.clear_board(),

        // Map selection
        KeyCode::Char('M') => app.toggle_maps_panel(),
        KeyCode::Char('[') => app.prev_map(),
        KeyCode::Char(']') => app.next_map(),

        // Viewport panning
        KeyCode::Up => app.viewport.pan(0, -1),
        KeyCode::Down => app.viewport.pan(0, 1),
        KeyCode::Left => app.viewport.pan(-1, 0),
        KeyCode::Right => app.viewport.pan(1, 0),

        _ => {}
    }
}
