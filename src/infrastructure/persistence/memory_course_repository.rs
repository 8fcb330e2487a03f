//! In-process implementation of the course repository.
//!
//! Backs handler and integration tests (and local demos) without a running
//! PostgreSQL instance. Rows keep `tags` and `path` in their encoded text
//! form so reads go through the same [`codec`] boundary as the Postgres
//! repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use crate::domain::entities::{Course, Level, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::codec;

struct StoredCourse {
    id: i64,
    title: String,
    description: String,
    distance_km: Option<f64>,
    estimated_minutes: Option<i32>,
    level: Level,
    region: String,
    tags: String,
    path: String,
    created_at: DateTime<Utc>,
}

/// Course repository backed by an in-memory table.
#[derive(Default)]
pub struct MemoryCourseRepository {
    rows: Mutex<Vec<StoredCourse>>,
}

impl MemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| AppError::internal("course store poisoned"))?;

        let id = rows.last().map_or(1, |row| row.id + 1);
        let created_at = Utc::now();

        rows.push(StoredCourse {
            id,
            title: new_course.title.clone(),
            description: new_course.description.clone(),
            distance_km: new_course.distance_km,
            estimated_minutes: new_course.estimated_minutes,
            level: new_course.level,
            region: new_course.region.clone(),
            tags: codec::encode_tags(&new_course.tags),
            path: codec::encode_path(&new_course.path),
            created_at,
        });

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
        let rows = self
            .rows
            .lock()
            .map_err(|_| AppError::internal("course store poisoned"))?;

        // Same ordering contract as the Postgres repository: creation time
        // descending, id descending on equal timestamps.
        let mut courses = rows
            .iter()
            .map(|row| {
                let tags = codec::decode_tags(&row.tags)
                    .map_err(|e| AppError::internal(format!("corrupt tags: {e}")))?;
                let path = codec::decode_path(&row.path)
                    .map_err(|e| AppError::internal(format!("corrupt path: {e}")))?;
                Ok(Course::new(
                    row.id,
                    row.title.clone(),
                    row.description.clone(),
                    row.distance_km,
                    row.estimated_minutes,
                    row.level,
                    row.region.clone(),
                    tags,
                    path,
                    row.created_at,
                ))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        courses.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(courses)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| AppError::internal("course store poisoned"))?;

        Ok(rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinate, Level};

    fn new_course(title: &str) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: String::new(),
            distance_km: None,
            estimated_minutes: None,
            level: Level::Easy,
            region: String::new(),
            tags: vec![],
            path: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MemoryCourseRepository::new();
        let a = repo.create(new_course("a")).await.unwrap();
        let b = repo.create(new_course("b")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = MemoryCourseRepository::new();
        repo.create(new_course("first")).await.unwrap();
        repo.create(new_course("second")).await.unwrap();
        repo.create(new_course("third")).await.unwrap();

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_round_trip_through_codec() {
        let repo = MemoryCourseRepository::new();
        let mut course = new_course("loop");
        course.tags = vec!["x".to_string(), "y".to_string()];
        repo.create(course).await.unwrap();

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed[0].tags, ["x", "y"]);
        assert_eq!(
            listed[0].path,
            [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]
        );
    }

    #[tokio::test]
    async fn test_count() {
        let repo = MemoryCourseRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(new_course("a")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
