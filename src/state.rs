//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::CourseService;

/// Cloneable handler state.
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
}

impl AppState {
    pub fn new(course_service: Arc<CourseService>) -> Self {
        Self { course_service }
    }
}
