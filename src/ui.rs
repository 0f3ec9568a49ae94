use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::App;
use crate::geometry::{CELL_HEIGHT, CELL_WIDTH, line_cells};
use crate::shapes::ShapeKind;

/// Width of the map list panel in cells.
pub const MAPS_PANEL_WIDTH: u16 = 18;

/// Board units between background grid dots.
const GRID_SPACING: f32 = 40.0;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Board area (+ optional map panel)
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    // The board stays at the left edge so mouse columns map straight onto it.
    let board_area = if app.show_maps {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(MAPS_PANEL_WIDTH)])
            .split(chunks[0]);

        render_maps_panel(frame, app, horizontal[1]);
        horizontal[0]
    } else {
        chunks[0]
    };

    frame.render_widget(BoardWidget { app }, board_area);
    render_status_bar(frame, app, chunks[1]);
    render_help_bar(frame, chunks[2]);
}

/// Render the map list panel
fn render_maps_panel(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::styled(
        " Maps",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (i, map) in app.maps.iter().enumerate() {
        let (prefix, style) = if i == app.selected_map {
            (
                "▸ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        lines.push(Line::styled(format!("{}{}", prefix, map.name), style));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Custom widget for rendering the board
struct BoardWidget<'a> {
    app: &'a App,
}

impl BoardWidget<'_> {
    /// Plot a glyph at a board cell, clipped to the widget area.
    fn plot(&self, buf: &mut Buffer, area: Rect, cell: (i32, i32), ch: char, style: Style) {
        let (cx, cy) = cell;
        if cx < 0 || cy < 0 {
            return;
        }
        let (cx, cy) = (cx as u16, cy as u16);
        if cx >= area.width || cy >= area.height {
            return;
        }
        buf[(area.x + cx, area.y + cy)].set_char(ch).set_style(style);
    }

    /// Dot the cells whose board span crosses a grid line on both axes.
    fn render_grid(&self, buf: &mut Buffer, area: Rect) {
        let grid_style = Style::default().fg(Color::DarkGray);
        let vp = &self.app.viewport;

        for row in 0..area.height {
            let y0 = vp.offset_y + row as f32 * CELL_HEIGHT;
            if y0.rem_euclid(GRID_SPACING) >= CELL_HEIGHT {
                continue;
            }
            for col in 0..area.width {
                let x0 = vp.offset_x + col as f32 * CELL_WIDTH;
                if x0.rem_euclid(GRID_SPACING) < CELL_WIDTH {
                    self.plot(buf, area, (col as i32, row as i32), '·', grid_style);
                }
            }
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_grid(buf, area);

        for shape in self.app.board.shapes() {
            let style = Style::default().fg(shape.color.to_ratatui());

            match &shape.kind {
                ShapeKind::Freehand { points } => {
                    // Join consecutive samples so fast drags leave no gaps.
                    let cells: Vec<(i32, i32)> = points
                        .iter()
                        .map(|&p| self.app.viewport.board_to_cell(p))
                        .collect();
                    if let Some(&first) = cells.first() {
                        self.plot(buf, area, first, '•', style);
                    }
                    for pair in cells.windows(2) {
                        for cell in line_cells(pair[0], pair[1]).into_iter().skip(1) {
                            self.plot(buf, area, cell, '•', style);
                        }
                    }
                }
                ShapeKind::Marker { marker, center, .. } => {
                    let cell = self.app.viewport.board_to_cell(*center);
                    self.plot(
                        buf,
                        area,
                        cell,
                        marker.glyph(),
                        style.add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let board = &app.board;
    let map_name = app.current_map().map(|m| m.name.as_str()).unwrap_or("—");

    let undo = if board.can_undo() { "↶" } else { " " };
    let redo = if board.can_redo() { "↷" } else { " " };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", map_name),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} | {} | {} shapes | {}{} ",
            board.tool().name(),
            board.color().name(),
            board.shapes().len(),
            undo,
            redo,
        )),
    ];
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help bar
fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help = " m:move  d:draw  s:■  c:●  t:▲  w:△  a:⊕  r:★  C:color  u/U:undo/redo  x:clear  M:maps  [/]:map  arrows:pan  q:quit";
    frame.render_widget(
        Paragraph::new(Line::styled(help, Style::default().fg(Color::DarkGray))),
        area,
    );
}
