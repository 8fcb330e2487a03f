//! In-progress path state for the course authoring editor.

use crate::domain::entities::{Coordinate, MIN_PATH_POINTS};

/// Accumulates clicked map points into an ordered coordinate sequence.
///
/// The editor is owned by the form authoring a course; every mutation is a
/// synchronous `&mut self` call, so the sequence read back afterwards is
/// always current. It is the single source of truth for both the map
/// overlay and the eventual submission payload.
///
/// Points are kept exactly as clicked: no deduplication and no
/// distance-based filtering, so two identical clicks produce two identical
/// points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathEditor {
    points: Vec<Coordinate>,
}

impl PathEditor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point to the end of the sequence. Always succeeds.
    pub fn add_point(&mut self, point: Coordinate) {
        self.points.push(point);
    }

    /// Removes and returns the most recently added point.
    ///
    /// A no-op returning `None` when the sequence is empty.
    pub fn undo_last(&mut self) -> Option<Coordinate> {
        self.points.pop()
    }

    /// Empties the sequence unconditionally.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The current sequence, in click order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True once the sequence is long enough to submit as a course path.
    pub fn has_min_points(&self) -> bool {
        self.points.len() >= MIN_PATH_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point_preserves_call_order() {
        let mut editor = PathEditor::new();
        for i in 0..5 {
            editor.add_point(Coordinate::new(f64::from(i), 0.0));
        }

        assert_eq!(editor.len(), 5);
        let lats: Vec<f64> = editor.points().iter().map(|p| p.lat).collect();
        assert_eq!(lats, [0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_identical_clicks_are_kept() {
        let mut editor = PathEditor::new();
        let point = Coordinate::new(37.5665, 126.978);
        editor.add_point(point);
        editor.add_point(point);

        assert_eq!(editor.points(), [point, point]);
    }

    #[test]
    fn test_undo_last_removes_most_recent() {
        let mut editor = PathEditor::new();
        editor.add_point(Coordinate::new(1.0, 1.0));
        editor.add_point(Coordinate::new(2.0, 2.0));

        assert_eq!(editor.undo_last(), Some(Coordinate::new(2.0, 2.0)));
        assert_eq!(editor.points(), [Coordinate::new(1.0, 1.0)]);
    }

    #[test]
    fn test_undo_last_on_empty_is_noop() {
        let mut editor = PathEditor::new();
        assert_eq!(editor.undo_last(), None);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_clear_always_empties() {
        let mut editor = PathEditor::new();
        assert!(editor.is_empty());
        editor.clear();
        assert!(editor.is_empty());

        editor.add_point(Coordinate::new(1.0, 1.0));
        editor.add_point(Coordinate::new(2.0, 2.0));
        editor.clear();
        assert_eq!(editor.len(), 0);
    }

    #[test]
    fn test_has_min_points() {
        let mut editor = PathEditor::new();
        assert!(!editor.has_min_points());
        editor.add_point(Coordinate::new(1.0, 1.0));
        assert!(!editor.has_min_points());
        editor.add_point(Coordinate::new(2.0, 2.0));
        assert!(editor.has_min_points());
    }
}
