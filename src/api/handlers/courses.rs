//! Handlers for the course endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::courses::{CourseResponse, CreateCourseRequest, CreateCourseResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all registered courses, newest first.
///
/// # Endpoint
///
/// `GET /api/courses`
///
/// # Response
///
/// A JSON array of courses with `tags` and `path` as structured arrays.
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list_courses().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Registers a new course.
///
/// # Endpoint
///
/// `POST /api/courses`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Han River loop",
///   "region": "Seongdong-gu, Seoul",
///   "distanceKm": 5.2,
///   "estimatedMinutes": 30,
///   "level": "EASY",
///   "tags": ["riverside", "night-friendly"],
///   "path": [{"lat": 37.5312, "lng": 127.0678}, {"lat": 37.5322, "lng": 127.073}]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "..."}` when `title` is missing/empty, `path` has
/// fewer than 2 points, a coordinate is out of range, or a numeric field is
/// negative.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), AppError> {
    payload.validate()?;

    let course = state
        .course_service
        .create_course(payload.into_submission())
        .await?;

    metrics::counter!("courses_created_total").increment(1);
    tracing::info!(course_id = course.id, points = course.path.len(), "course registered");

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse { id: course.id }),
    ))
}
