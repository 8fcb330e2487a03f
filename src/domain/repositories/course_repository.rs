//! Repository trait for course data access.

use crate::domain::entities::{Course, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting and listing courses.
///
/// Courses are create-once records; there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCourseRepository`] - In-process store for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persists a new course, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Lists all courses ordered by creation time, most recent first.
    ///
    /// Stored `tags` and `path` text is decoded back into structured
    /// values before the courses are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or when a stored
    /// row fails to decode.
    async fn list_all(&self) -> Result<Vec<Course>, AppError>;

    /// Counts persisted courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
