//! The drawing board state machine.
//!
//! Owns the live canvas (insertion-ordered shapes), the in-flight pointer
//! gesture, and the snapshot history. Every operation is a total, synchronous
//! state transition: out-of-order or redundant gesture calls degrade to
//! no-ops, so stray pointer events can never corrupt the board.

use crate::geometry::Point;
use crate::history::History;
use crate::shapes::{MarkerKind, Shape, ShapeColor, ShapeId, ShapeKind};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Move,
    Draw,
    Marker(MarkerKind),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Move => "Move",
            Tool::Draw => "Draw",
            Tool::Marker(kind) => kind.name(),
        }
    }

    /// Color applied when the tool is selected. The move tool keeps the
    /// current color.
    pub fn default_color(&self) -> Option<ShapeColor> {
        match self {
            Tool::Move => None,
            Tool::Draw => Some(ShapeColor::Mint),
            Tool::Marker(kind) => Some(kind.default_color()),
        }
    }
}

/// In-flight pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// A freehand stroke is being extended.
    Drawing { shape_id: ShapeId },
    /// A marker is being moved. `grab` is the pointer's offset from the
    /// marker center at pickup, so the marker doesn't jump under the cursor.
    Dragging { shape_id: ShapeId, grab: Point },
}

/// Canvas shapes + gesture session + undo history.
#[derive(Debug)]
pub struct DrawingBoard {
    shapes: Vec<Shape>,
    history: History,
    gesture: Gesture,
    tool: Tool,
    color: ShapeColor,
}

impl DrawingBoard {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            history: History::default(),
            gesture: Gesture::Idle,
            tool: Tool::Move,
            color: ShapeColor::Mint,
        }
    }

    /// Shapes in insertion order (z-order, bottom to top).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }

    /// Switch tools, taking over the tool's default color.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        if let Some(color) = tool.default_color() {
            self.color = color;
        }
    }

    /// Pointer-down. Starts a drag (move tool over a marker), starts a
    /// freehand stroke (draw tool), or stamps a marker and commits
    /// immediately (marker tools). Ignored while a gesture is active.
    pub fn begin_gesture(&mut self, pos: Point) {
        if self.gesture != Gesture::Idle {
            return;
        }
        match self.tool {
            Tool::Move => {
                let hit = self.shape_at(pos).and_then(|shape| match shape.kind {
                    ShapeKind::Marker { center, .. } => Some((shape.id, center)),
                    ShapeKind::Freehand { .. } => None,
                });
                if let Some((shape_id, center)) = hit {
                    self.gesture = Gesture::Dragging {
                        shape_id,
                        grab: Point::new(pos.x - center.x, pos.y - center.y),
                    };
                }
            }
            Tool::Draw => {
                let shape = Shape::freehand(pos, self.color);
                let shape_id = shape.id;
                self.shapes.push(shape);
                self.gesture = Gesture::Drawing { shape_id };
            }
            Tool::Marker(kind) => {
                self.shapes.push(Shape::marker(kind, pos, self.color));
                self.commit();
            }
        }
    }

    /// Pointer-move. Extends the stroke or moves the dragged marker; a no-op
    /// without an active gesture or when the shape is gone (an undo or clear
    /// raced the gesture).
    pub fn continue_gesture(&mut self, pos: Point) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing { shape_id } => {
                if let Some(shape) = self.shape_mut(shape_id) {
                    if let ShapeKind::Freehand { ref mut points } = shape.kind {
                        points.push(pos);
                    }
                }
            }
            Gesture::Dragging { shape_id, grab } => {
                if let Some(shape) = self.shape_mut(shape_id) {
                    if let ShapeKind::Marker { ref mut center, .. } = shape.kind {
                        *center = Point::new(pos.x - grab.x, pos.y - grab.y);
                    }
                }
            }
        }
    }

    /// Pointer-up or pointer-leave. Commits if a stroke or drag was in
    /// flight, then clears the gesture unconditionally, so calling this
    /// twice is harmless.
    pub fn end_gesture(&mut self) {
        if self.gesture != Gesture::Idle {
            self.commit();
        }
        self.gesture = Gesture::Idle;
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo() {
            self.shapes = snapshot.to_vec();
            true
        } else {
            false
        }
    }

    /// Step forward one snapshot. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo() {
            self.shapes = snapshot.to_vec();
            true
        } else {
            false
        }
    }

    /// Remove every shape and commit the empty canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.commit();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    /// Topmost shape at the position, scanning reverse insertion order.
    pub fn shape_at(&self, pos: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|shape| shape.contains(pos))
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    fn commit(&mut self) {
        self.history.push(self.shapes.clone());
    }
}

impl Default for DrawingBoard {
    fn default() -> Self {
        Self::new()
    }
}
