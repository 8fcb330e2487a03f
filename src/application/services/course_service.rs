//! Course creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{Course, CourseSubmission, MIN_PATH_POINTS, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// Message returned when the required fields of a submission are missing.
///
/// One combined message covers both conditions; clients treat any 400
/// uniformly.
const REQUIRED_FIELDS_MESSAGE: &str = "title and a path with at least 2 points are required";

/// Service for registering and listing running courses.
///
/// Owns the create-side contract: required-field checks, coordinate range
/// checks, and the defaulting policy for optional metadata.
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Validates a submission and persists it as a new course.
    ///
    /// # Validation
    ///
    /// - `title` must be present and non-empty after trimming
    /// - `path` must hold at least [`MIN_PATH_POINTS`] coordinates
    /// - every coordinate must be within valid geographic ranges
    /// - `distance_km` / `estimated_minutes` must not be negative
    ///
    /// # Defaulting
    ///
    /// `description` and `region` default to `""`, `level` to `EASY`,
    /// `tags` to `[]`; absent numeric fields stay absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when any check fails (nothing is
    /// persisted), [`AppError::Internal`] on repository errors.
    pub async fn create_course(&self, submission: CourseSubmission) -> Result<Course, AppError> {
        let title = submission
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let path = submission.path.unwrap_or_default();

        let Some(title) = title else {
            return Err(AppError::bad_request(REQUIRED_FIELDS_MESSAGE));
        };
        if path.len() < MIN_PATH_POINTS {
            return Err(AppError::bad_request(REQUIRED_FIELDS_MESSAGE));
        }

        if let Some(point) = path.iter().find(|p| !p.is_in_range()) {
            return Err(AppError::bad_request(format!(
                "path contains a coordinate outside valid ranges: ({}, {})",
                point.lat, point.lng
            )));
        }

        if submission.distance_km.is_some_and(|d| d < 0.0) {
            return Err(AppError::bad_request("distanceKm must not be negative"));
        }
        if submission.estimated_minutes.is_some_and(|m| m < 0) {
            return Err(AppError::bad_request(
                "estimatedMinutes must not be negative",
            ));
        }

        let new_course = NewCourse {
            title: title.to_string(),
            description: submission.description.unwrap_or_default(),
            distance_km: submission.distance_km,
            estimated_minutes: submission.estimated_minutes,
            level: submission.level.unwrap_or_default(),
            region: submission.region.unwrap_or_default(),
            tags: submission.tags.unwrap_or_default(),
            path,
        };

        self.repository.create(new_course).await
    }

    /// Lists all registered courses, newest first.
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.repository.list_all().await
    }

    /// Counts registered courses.
    pub async fn count_courses(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
