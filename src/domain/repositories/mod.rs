//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod course_repository;

pub use course_repository::CourseRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
