//! Board-space geometry and the terminal viewport.
//!
//! Board coordinates are the pixel space drawings live in; the viewport maps
//! terminal cells onto it for both input translation and rendering.

/// Board units spanned by one terminal cell horizontally.
pub const CELL_WIDTH: f32 = 8.0;

/// Board units spanned by one terminal cell vertically. Cells are roughly
/// twice as tall as they are wide, so the vertical step is doubled to keep
/// drawn shapes proportional.
pub const CELL_HEIGHT: f32 = 16.0;

/// A position in board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport - where on the board the terminal's top-left cell sits.
/// Rendering clips against the widget area, so the viewport carries only
/// the pan offset.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a terminal cell to the board position at its center.
    pub fn screen_to_board(&self, col: u16, row: u16) -> Point {
        Point::new(
            self.offset_x + (col as f32 + 0.5) * CELL_WIDTH,
            self.offset_y + (row as f32 + 0.5) * CELL_HEIGHT,
        )
    }

    /// Convert a board position to the cell containing it (may be offscreen).
    pub fn board_to_cell(&self, pos: Point) -> (i32, i32) {
        (
            ((pos.x - self.offset_x) / CELL_WIDTH).floor() as i32,
            ((pos.y - self.offset_y) / CELL_HEIGHT).floor() as i32,
        )
    }

    /// Pan the viewport by whole cells.
    pub fn pan(&mut self, dcols: i32, drows: i32) {
        self.offset_x += dcols as f32 * CELL_WIDTH;
        self.offset_y += drows as f32 * CELL_HEIGHT;
    }
}

/// Generate all cells on a line using Bresenham's algorithm.
///
/// Used to join consecutive freehand samples so fast drags leave no gaps.
pub fn line_cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();

    let dx = (to.0 - from.0).abs();
    let dy = -(to.1 - from.1).abs();
    let sx = if from.0 < to.0 { 1 } else { -1 };
    let sy = if from.1 < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = from.0;
    let mut y = from.1;

    loop {
        cells.push((x, y));

        if x == to.0 && y == to.1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == to.0 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == to.1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_board_round_trips_through_cell() {
        let vp = Viewport::new();
        let pos = vp.screen_to_board(10, 5);
        assert_eq!(vp.board_to_cell(pos), (10, 5));
    }

    #[test]
    fn pan_shifts_the_mapping() {
        let mut vp = Viewport::new();
        let before = vp.screen_to_board(0, 0);
        vp.pan(2, -1);
        let after = vp.screen_to_board(0, 0);
        assert!((after.x - before.x - 2.0 * CELL_WIDTH).abs() < 1e-3);
        assert!((after.y - before.y + CELL_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn panned_viewport_keeps_cells_aligned() {
        let mut vp = Viewport::new();
        vp.pan(-4, 7);
        let pos = vp.screen_to_board(3, 2);
        assert_eq!(vp.board_to_cell(pos), (3, 2));
    }

    #[test]
    fn line_cells_single_point() {
        assert_eq!(line_cells((3, 4), (3, 4)), vec![(3, 4)]);
    }

    #[test]
    fn line_cells_horizontal() {
        let cells = line_cells((0, 0), (4, 0));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(4, 0)));
    }

    #[test]
    fn line_cells_diagonal_hits_both_endpoints() {
        let cells = line_cells((-2, -2), (3, 1));
        assert_eq!(cells.first(), Some(&(-2, -2)));
        assert_eq!(cells.last(), Some(&(3, 1)));
    }
}
