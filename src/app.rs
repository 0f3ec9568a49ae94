//! Host session state: the board plus everything the TUI keeps around it.

use tracing::debug;

use crate::board::{DrawingBoard, Tool};
use crate::geometry::Viewport;
use crate::maps::{MapCatalog, MapInfo};

/// Main application state.
pub struct App {
    pub board: DrawingBoard,
    pub maps: MapCatalog,
    pub selected_map: usize,
    pub viewport: Viewport,
    pub show_maps: bool,
    pub status_message: Option<String>,
    pub running: bool,
}

impl App {
    pub fn new(maps: MapCatalog) -> Self {
        Self {
            board: DrawingBoard::new(),
            maps,
            selected_map: 0,
            viewport: Viewport::new(),
            show_maps: true,
            status_message: None,
            running: true,
        }
    }

    pub fn current_map(&self) -> Option<&MapInfo> {
        self.maps.get(self.selected_map)
    }

    /// Select a map by catalog index (out-of-range indices are ignored).
    pub fn select_map(&mut self, index: usize) {
        if let Some(map) = self.maps.get(index) {
            let name = map.name.clone();
            self.selected_map = index;
            debug!("selected map {}", name);
            self.set_status(format!("Map: {}", name));
        }
    }

    pub fn next_map(&mut self) {
        if !self.maps.is_empty() {
            self.select_map((self.selected_map + 1) % self.maps.len());
        }
    }

    pub fn prev_map(&mut self) {
        if !self.maps.is_empty() {
            self.select_map((self.selected_map + self.maps.len() - 1) % self.maps.len());
        }
    }

    /// Switch to a different tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.board.select_tool(tool);
        self.set_status(format!("Tool: {}", tool.name()));
    }

    /// Cycle the active color through the palette.
    pub fn cycle_color(&mut self) {
        let color = self.board.color().next();
        self.board.set_color(color);
        self.set_status(format!("Color: {}", color.name()));
    }

    pub fn undo(&mut self) {
        if self.board.undo() {
            self.set_status("Undo");
        } else {
            self.set_status("Nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        if self.board.redo() {
            self.set_status("Redo");
        } else {
            self.set_status("Nothing to redo");
        }
    }

    /// Wipe the board (a single undoable action).
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.set_status("Cleared");
    }

    pub fn toggle_maps_panel(&mut self) {
        self.show_maps = !self.show_maps;
    }

    /// Set a status message to display.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(MapCatalog::builtin())
    }

    #[test]
    fn map_cycling_wraps_both_ways() {
        let mut app = app();
        app.prev_map();
        assert_eq!(app.selected_map, app.maps.len() - 1);
        app.next_map();
        assert_eq!(app.selected_map, 0);
    }

    #[test]
    fn out_of_range_map_selection_is_ignored() {
        let mut app = app();
        app.select_map(99);
        assert_eq!(app.selected_map, 0);
    }

    #[test]
    fn undo_without_history_reports_status() {
        let mut app = app();
        app.undo();
        assert_eq!(app.status_message.as_deref(), Some("Nothing to undo"));
    }
}
