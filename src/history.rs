//! Bounded snapshot history for undo/redo.
//!
//! Linear history: a vector of canvas snapshots plus a cursor at the active
//! one. Pushing after an undo discards the redo tail. The cursor is `None`
//! exactly when the history is empty.

use crate::shapes::Shape;

/// Maximum snapshots retained by default.
const DEFAULT_CAPACITY: usize = 100;

/// Snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Shape>>,
    cursor: Option<usize>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Append a snapshot, discarding anything beyond the cursor first. The
    /// oldest snapshot is dropped once the capacity is exceeded.
    pub fn push(&mut self, snapshot: Vec<Shape>) {
        match self.cursor {
            Some(i) => self.snapshots.truncate(i + 1),
            None => self.snapshots.clear(),
        }
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step the cursor back and return the now-active snapshot, or `None`
    /// when already at the oldest one.
    pub fn undo(&mut self) -> Option<&[Shape]> {
        let i = self.cursor?;
        if i == 0 {
            return None;
        }
        self.cursor = Some(i - 1);
        Some(&self.snapshots[i - 1])
    }

    /// Step the cursor forward and return the now-active snapshot, or `None`
    /// when already at the newest one.
    pub fn redo(&mut self) -> Option<&[Shape]> {
        let i = self.cursor?;
        if i + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(i + 1);
        Some(&self.snapshots[i + 1])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.snapshots.len())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::shapes::{MarkerKind, Shape, ShapeColor};

    fn snapshot(n: usize) -> Vec<Shape> {
        (0..n)
            .map(|i| {
                Shape::marker(
                    MarkerKind::Square,
                    Point::new(i as f32, 0.0),
                    ShapeColor::Mint,
                )
            })
            .collect()
    }

    #[test]
    fn starts_empty_with_no_cursor() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn push_moves_cursor_to_the_end() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_and_redo_walk_the_snapshots() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        assert_eq!(history.undo().map(<[Shape]>::len), Some(2));
        assert_eq!(history.undo().map(<[Shape]>::len), Some(1));
        assert!(history.undo().is_none());

        assert_eq!(history.redo().map(<[Shape]>::len), Some(2));
        assert_eq!(history.redo().map(<[Shape]>::len), Some(3));
        assert!(history.redo().is_none());
    }

    #[test]
    fn push_after_undo_discards_the_redo_tail() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));
        history.undo();
        history.undo();

        history.push(snapshot(4));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.can_redo());
        assert_eq!(history.undo().map(<[Shape]>::len), Some(1));
    }

    #[test]
    fn capacity_drops_the_oldest_snapshot() {
        let mut history = History::new(3);
        for n in 1..=5 {
            history.push(snapshot(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        // Oldest surviving snapshot is the third one pushed.
        history.undo();
        assert_eq!(history.undo().map(<[Shape]>::len), Some(3));
        assert!(history.undo().is_none());
    }
}
