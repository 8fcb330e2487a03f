//! Repository implementations.
//!
//! - [`PgCourseRepository`] - PostgreSQL-backed storage
//! - [`MemoryCourseRepository`] - In-process storage for tests and demos
//! - [`codec`] - The text encode/decode boundary for `tags` and `path`

pub mod codec;
pub mod memory_course_repository;
pub mod pg_course_repository;

pub use memory_course_repository::MemoryCourseRepository;
pub use pg_course_repository::PgCourseRepository;
