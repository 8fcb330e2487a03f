//! API route configuration.

use crate::api::handlers::{create_course_handler, list_courses_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /courses` - List registered courses, newest first
/// - `POST /courses` - Register a new course
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/courses",
        get(list_courses_handler).post(create_course_handler),
    )
}
