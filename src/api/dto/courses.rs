//! DTOs for the course endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Coordinate, Course, CourseSubmission, Level};

/// Request body for `POST /api/courses`.
///
/// `title` and `path` are deserialized as optional so that a missing field
/// reaches the service's required-field check and comes back as the
/// contract's 400 body, instead of a framework deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "distanceKm must not be negative"))]
    pub distance_km: Option<f64>,

    #[validate(range(min = 0, message = "estimatedMinutes must not be negative"))]
    pub estimated_minutes: Option<i32>,

    pub level: Option<Level>,

    pub region: Option<String>,

    pub tags: Option<Vec<String>>,

    // Presence, length, and coordinate ranges are the service's checks.
    pub path: Option<Vec<Coordinate>>,
}

impl CreateCourseRequest {
    /// Converts the request into a domain submission.
    pub fn into_submission(self) -> CourseSubmission {
        CourseSubmission {
            title: self.title,
            description: self.description,
            distance_km: self.distance_km,
            estimated_minutes: self.estimated_minutes,
            level: self.level,
            region: self.region,
            tags: self.tags,
            path: self.path,
        }
    }
}

/// Response body for a successful course creation.
#[derive(Debug, Serialize)]
pub struct CreateCourseResponse {
    pub id: i64,
}

/// A course as returned by `GET /api/courses`.
///
/// `tags` and `path` are structured arrays here; their stored text form
/// never crosses the API boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub level: Level,
    pub region: String,
    pub tags: Vec<String>,
    pub path: Vec<Coordinate>,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            distance_km: course.distance_km,
            estimated_minutes: course.estimated_minutes,
            level: course.level,
            region: course.region,
            tags: course.tags,
            path: course.path,
            created_at: course.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_minimal_payload() {
        let request: CreateCourseRequest = serde_json::from_value(json!({
            "title": "Test",
            "path": [{"lat": 0.0, "lng": 0.0}, {"lat": 1.0, "lng": 1.0}]
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.title.as_deref(), Some("Test"));
        assert!(request.level.is_none());
    }

    #[test]
    fn test_request_tolerates_missing_required_fields() {
        // Presence is the service's concern; deserialization must not fail.
        let request: CreateCourseRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.title.is_none());
        assert!(request.path.is_none());
    }

    #[test]
    fn test_request_rejects_negative_distance() {
        let request: CreateCourseRequest = serde_json::from_value(json!({
            "title": "Test",
            "distanceKm": -5.0,
            "path": [{"lat": 0.0, "lng": 0.0}, {"lat": 1.0, "lng": 1.0}]
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let course = Course::new(
            3,
            "Test".to_string(),
            String::new(),
            Some(5.2),
            Some(30),
            Level::Easy,
            String::new(),
            vec![],
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            Utc::now(),
        );

        let json = serde_json::to_value(CourseResponse::from(course)).unwrap();
        assert_eq!(json["distanceKm"], 5.2);
        assert_eq!(json["estimatedMinutes"], 30);
        assert_eq!(json["level"], "EASY");
        assert!(json["createdAt"].is_string());
    }
}
