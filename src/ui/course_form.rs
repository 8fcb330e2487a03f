//! Course submission form state.

use crate::domain::entities::{Coordinate, CourseSubmission, Level, MIN_PATH_POINTS};
use crate::ui::path_editor::PathEditor;

/// Validation errors raised before a submission payload exists.
///
/// On any of these, the user is notified and no network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("course title must not be empty")]
    EmptyTitle,

    #[error("draw at least {MIN_PATH_POINTS} points on the map")]
    PathTooShort,

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
}

/// Splits a comma-separated tag string into an ordered tag list.
///
/// Segments are trimmed; empty segments are dropped; duplicates and order
/// are preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// In-progress metadata and path for a course being authored.
///
/// Text fields hold raw input exactly as typed; parsing happens once, in
/// [`CourseForm::submission`]. The form owns the [`PathEditor`], so every
/// editor mutation is immediately visible to validation and rendering.
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    pub title: String,
    pub region: String,
    pub description: String,
    /// Raw text input; blank means "not provided".
    pub distance_km: String,
    /// Raw text input; blank means "not provided".
    pub estimated_minutes: String,
    pub level: Level,
    /// Comma-separated tag input.
    pub tag_text: String,
    /// The path editor for this form. Map clicks, undo, and clear all go
    /// through its methods.
    pub editor: PathEditor,
}

impl CourseForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the in-progress path.
    pub fn path(&self) -> &[Coordinate] {
        self.editor.points()
    }

    /// Validates the form and builds the submission payload.
    ///
    /// Rejects an empty/whitespace-only title and a path shorter than
    /// [`MIN_PATH_POINTS`]. Blank numeric input maps to an explicit absent
    /// value, never zero; non-blank input that fails to parse is an error.
    pub fn submission(&self) -> Result<CourseSubmission, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }
        if !self.editor.has_min_points() {
            return Err(FormError::PathTooShort);
        }

        let distance_km = parse_optional_number(&self.distance_km, "distanceKm")?;
        let estimated_minutes =
            parse_optional_number::<i32>(&self.estimated_minutes, "estimatedMinutes")?;

        Ok(CourseSubmission {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            distance_km,
            estimated_minutes,
            level: Some(self.level),
            region: Some(self.region.clone()),
            tags: Some(parse_tags(&self.tag_text)),
            path: Some(self.editor.points().to_vec()),
        })
    }
}

fn parse_optional_number<T: std::str::FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<Option<T>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| FormError::InvalidNumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Coordinate;

    fn form_with_path() -> CourseForm {
        let mut form = CourseForm {
            title: "Han River loop".to_string(),
            ..Default::default()
        };
        form.editor.add_point(Coordinate::new(37.1, 127.1));
        form.editor.add_point(Coordinate::new(37.2, 127.2));
        form
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags("a, b,,  c "), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_tags_preserves_order_and_duplicates() {
        assert_eq!(parse_tags("b,a,b"), ["b", "a", "b"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_submission_rejects_empty_title() {
        let mut form = form_with_path();
        form.title = "   ".to_string();
        assert_eq!(form.submission().unwrap_err(), FormError::EmptyTitle);
    }

    #[test]
    fn test_submission_rejects_short_path() {
        let mut form = form_with_path();
        form.editor.undo_last();
        assert_eq!(form.submission().unwrap_err(), FormError::PathTooShort);
    }

    #[test]
    fn test_submission_blank_numbers_are_absent() {
        let submission = form_with_path().submission().unwrap();
        assert_eq!(submission.distance_km, None);
        assert_eq!(submission.estimated_minutes, None);
    }

    #[test]
    fn test_submission_parses_numbers() {
        let mut form = form_with_path();
        form.distance_km = "5.2".to_string();
        form.estimated_minutes = " 30 ".to_string();

        let submission = form.submission().unwrap();
        assert_eq!(submission.distance_km, Some(5.2));
        assert_eq!(submission.estimated_minutes, Some(30));
    }

    #[test]
    fn test_submission_rejects_unparsable_number() {
        let mut form = form_with_path();
        form.distance_km = "five".to_string();
        assert_eq!(
            form.submission().unwrap_err(),
            FormError::InvalidNumber { field: "distanceKm" }
        );
    }

    #[test]
    fn test_submission_carries_editor_path_and_tags() {
        let mut form = form_with_path();
        form.tag_text = "riverside, night-friendly".to_string();

        let submission = form.submission().unwrap();
        assert_eq!(
            submission.path.unwrap(),
            [Coordinate::new(37.1, 127.1), Coordinate::new(37.2, 127.2)]
        );
        assert_eq!(submission.tags.unwrap(), ["riverside", "night-friendly"]);
        assert_eq!(submission.level, Some(Level::Easy));
        assert_eq!(submission.description.as_deref(), Some(""));
    }
}
