//! Shape types for the board: markers and freehand strokes.

use ratatui::style::Color;
use uuid::Uuid;

use crate::geometry::Point;

/// Default marker diameter in board units.
pub const DEFAULT_MARKER_SIZE: f32 = 30.0;

/// Shape identifier - unique within a session, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color for shapes - the board's fixed 15-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeColor {
    #[default]
    Mint,
    Red,
    Blue,
    Gold,
    Orange,
    Purple,
    Cyan,
    Pink,
    Lime,
    White,
    Silver,
    Gray,
    Rose,
    Sky,
    Cream,
}

impl ShapeColor {
    /// RGB value of this palette entry.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ShapeColor::Mint => (0x00, 0xff, 0x99),
            ShapeColor::Red => (0xff, 0x33, 0x33),
            ShapeColor::Blue => (0x33, 0x66, 0xff),
            ShapeColor::Gold => (0xff, 0xcc, 0x00),
            ShapeColor::Orange => (0xff, 0x66, 0x00),
            ShapeColor::Purple => (0x99, 0x33, 0xff),
            ShapeColor::Cyan => (0x33, 0xff, 0xff),
            ShapeColor::Pink => (0xff, 0x33, 0xcc),
            ShapeColor::Lime => (0x66, 0xff, 0x33),
            ShapeColor::White => (0xff, 0xff, 0xff),
            ShapeColor::Silver => (0xcc, 0xcc, 0xcc),
            ShapeColor::Gray => (0x66, 0x66, 0x66),
            ShapeColor::Rose => (0xff, 0x99, 0x99),
            ShapeColor::Sky => (0x99, 0xcc, 0xff),
            ShapeColor::Cream => (0xff, 0xff, 0x99),
        }
    }

    /// Convert to ratatui Color for terminal rendering.
    pub fn to_ratatui(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }

    /// Get display name for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            ShapeColor::Mint => "Mint",
            ShapeColor::Red => "Red",
            ShapeColor::Blue => "Blue",
            ShapeColor::Gold => "Gold",
            ShapeColor::Orange => "Orange",
            ShapeColor::Purple => "Purple",
            ShapeColor::Cyan => "Cyan",
            ShapeColor::Pink => "Pink",
            ShapeColor::Lime => "Lime",
            ShapeColor::White => "White",
            ShapeColor::Silver => "Silver",
            ShapeColor::Gray => "Gray",
            ShapeColor::Rose => "Rose",
            ShapeColor::Sky => "Sky",
            ShapeColor::Cream => "Cream",
        }
    }

    /// Cycle to the next palette entry.
    pub fn next(self) -> Self {
        match self {
            ShapeColor::Mint => ShapeColor::Red,
            ShapeColor::Red => ShapeColor::Blue,
            ShapeColor::Blue => ShapeColor::Gold,
            ShapeColor::Gold => ShapeColor::Orange,
            ShapeColor::Orange => ShapeColor::Purple,
            ShapeColor::Purple => ShapeColor::Cyan,
            ShapeColor::Cyan => ShapeColor::Pink,
            ShapeColor::Pink => ShapeColor::Lime,
            ShapeColor::Lime => ShapeColor::White,
            ShapeColor::White => ShapeColor::Silver,
            ShapeColor::Silver => ShapeColor::Gray,
            ShapeColor::Gray => ShapeColor::Rose,
            ShapeColor::Rose => ShapeColor::Sky,
            ShapeColor::Sky => ShapeColor::Cream,
            ShapeColor::Cream => ShapeColor::Mint,
        }
    }
}

/// The marker stamps that can be placed on a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Square,
    Circle,
    Triangle,
    Warning,
    Anchor,
    Star,
}

impl MarkerKind {
    /// Color applied when this marker's tool is selected.
    pub fn default_color(self) -> ShapeColor {
        match self {
            MarkerKind::Square | MarkerKind::Circle | MarkerKind::Triangle => ShapeColor::Mint,
            MarkerKind::Warning => ShapeColor::Red,
            MarkerKind::Anchor => ShapeColor::Blue,
            MarkerKind::Star => ShapeColor::Gold,
        }
    }

    /// Glyph used by the terminal renderer.
    pub fn glyph(self) -> char {
        match self {
            MarkerKind::Square => '■',
            MarkerKind::Circle => '●',
            MarkerKind::Triangle => '▲',
            MarkerKind::Warning => '△',
            MarkerKind::Anchor => '⊕',
            MarkerKind::Star => '★',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkerKind::Square => "Square",
            MarkerKind::Circle => "Circle",
            MarkerKind::Triangle => "Triangle",
            MarkerKind::Warning => "Warning",
            MarkerKind::Anchor => "Anchor",
            MarkerKind::Star => "Star",
        }
    }
}

/// Geometry of a drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Freehand stroke - ordered polyline of pointer samples.
    Freehand { points: Vec<Point> },
    /// Marker stamp centered on a point. `size` is the diameter.
    Marker {
        marker: MarkerKind,
        center: Point,
        size: f32,
    },
}

/// A shape placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub color: ShapeColor,
    pub kind: ShapeKind,
}

impl Shape {
    /// Start a freehand stroke at a single point.
    pub fn freehand(start: Point, color: ShapeColor) -> Self {
        Self {
            id: ShapeId::new(),
            color,
            kind: ShapeKind::Freehand {
                points: vec![start],
            },
        }
    }

    /// Place a marker with the default size.
    pub fn marker(marker: MarkerKind, center: Point, color: ShapeColor) -> Self {
        Self {
            id: ShapeId::new(),
            color,
            kind: ShapeKind::Marker {
                marker,
                center,
                size: DEFAULT_MARKER_SIZE,
            },
        }
    }

    /// Whether the position hits this shape. Only markers are hit-testable;
    /// a marker hits within half its size of the center.
    pub fn contains(&self, pos: Point) -> bool {
        match self.kind {
            ShapeKind::Freehand { .. } => false,
            ShapeKind::Marker { center, size, .. } => pos.distance_to(center) <= size / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_hit_is_inclusive_at_the_radius() {
        let shape = Shape::marker(MarkerKind::Circle, Point::new(0.0, 0.0), ShapeColor::Mint);
        assert!(shape.contains(Point::new(15.0, 0.0)));
        assert!(!shape.contains(Point::new(15.1, 0.0)));
    }

    #[test]
    fn marker_at_origin_is_hit_testable() {
        let shape = Shape::marker(MarkerKind::Square, Point::new(0.0, 0.0), ShapeColor::Red);
        assert!(shape.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn freehand_strokes_are_not_hit_testable() {
        let shape = Shape::freehand(Point::new(5.0, 5.0), ShapeColor::Mint);
        assert!(!shape.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn color_cycle_visits_the_whole_palette() {
        let mut seen = vec![ShapeColor::Mint];
        let mut color = ShapeColor::Mint.next();
        while color != ShapeColor::Mint {
            assert!(!seen.contains(&color));
            seen.push(color);
            color = color.next();
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn shape_ids_are_unique() {
        let a = Shape::freehand(Point::new(0.0, 0.0), ShapeColor::Mint);
        let b = Shape::freehand(Point::new(0.0, 0.0), ShapeColor::Mint);
        assert_ne!(a.id, b.id);
    }
}
