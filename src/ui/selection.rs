//! Shared selected-course state for the list and map views.

use crate::domain::entities::Course;

/// The id of the course currently highlighted across the list and map.
///
/// Both views read the same value: the list to highlight the selected card,
/// the map to widen the selected polyline and center the viewport. Selecting
/// from either view (card click or start-marker click) converges on
/// [`Selection::select`]. No selection is a valid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, course_id: i64) {
        self.selected = Some(course_id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn is_selected(&self, course_id: i64) -> bool {
        self.selected == Some(course_id)
    }

    /// Resolves the selection against a course list.
    ///
    /// Returns the selected course when it is present in the list, falling
    /// back to the first course (the default map center), and `None` only
    /// for an empty list.
    pub fn resolve<'a>(&self, courses: &'a [Course]) -> Option<&'a Course> {
        courses
            .iter()
            .find(|c| self.is_selected(c.id))
            .or_else(|| courses.first())
    }
}
