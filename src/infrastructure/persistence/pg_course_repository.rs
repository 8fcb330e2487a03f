//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Course, Level, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::codec;

/// PostgreSQL repository for course storage and retrieval.
///
/// `tags` and `path` go through the [`codec`] text boundary on every write
/// and read; the remaining columns are native.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Raw row shape of the `courses` table.
#[derive(FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: String,
    distance_km: Option<f64>,
    estimated_minutes: Option<i32>,
    level: String,
    region: String,
    tags: String,
    path: String,
    created_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self) -> Result<Course, AppError> {
        let level: Level = self
            .level
            .parse()
            .map_err(|e| AppError::internal(format!("corrupt course row {}: {e}", self.id)))?;
        let tags = codec::decode_tags(&self.tags)
            .map_err(|e| AppError::internal(format!("corrupt tags on course {}: {e}", self.id)))?;
        let path = codec::decode_path(&self.path)
            .map_err(|e| AppError::internal(format!("corrupt path on course {}: {e}", self.id)))?;

        Ok(Course::new(
            self.id,
            self.title,
            self.description,
            self.distance_km,
            self.estimated_minutes,
            level,
            self.region,
            tags,
            path,
            self.created_at,
        ))
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO courses
                (title, description, distance_km, estimated_minutes, level, region, tags, path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created_at
            "#,
        )
        .bind(&new_course.title)
        .bind(&new_course.description)
        .bind(new_course.distance_km)
        .bind(new_course.estimated_minutes)
        .bind(new_course.level.as_str())
        .bind(&new_course.region)
        .bind(codec::encode_tags(&new_course.tags))
        .bind(codec::encode_path(&new_course.path))
        .fetch_one(self.pool.as_ref())
        .await?;

        let id: i64 = row.try_get("id")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(Course::new(
            id,
            new_course.title,
            new_course.description,
            new_course.distance_km,
            new_course.estimated_minutes,
            new_course.level,
            new_course.region,
            new_course.tags,
            new_course.path,
            created_at,
        ))
    }

    async fn list_all(&self) -> Result<Vec<Course>, AppError> {
        // id DESC tie-break keeps same-timestamp rows newest first.
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, distance_km, estimated_minutes,
                   level, region, tags, path, created_at
            FROM courses
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(CourseRow::into_course).collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
