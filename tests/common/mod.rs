#![allow(dead_code)]

use std::sync::Arc;

use course_map::application::services::CourseService;
use course_map::infrastructure::persistence::MemoryCourseRepository;
use course_map::state::AppState;
use serde_json::{Value, json};

/// Application state over the in-memory repository.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryCourseRepository::new());
    AppState::new(Arc::new(CourseService::new(repository)))
}

/// Minimal valid creation payload with the given title.
pub fn course_payload(title: &str) -> Value {
    json!({
        "title": title,
        "path": [
            {"lat": 37.1, "lng": 127.1},
            {"lat": 37.2, "lng": 127.2}
        ]
    })
}
