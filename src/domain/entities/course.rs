//! Course entity representing a registered running course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Coordinate;

/// Minimum number of path points for a course to be submittable.
pub const MIN_PATH_POINTS: usize = 2;

/// Difficulty classification of a course.
///
/// Stored as upper-case text (`EASY` / `NORMAL` / `HARD`), which is also
/// the JSON wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Level {
    /// The stored text form of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Normal => "NORMAL",
            Level::Hard => "HARD",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored level value is not one of the known variants.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown course level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Level::Easy),
            "NORMAL" => Ok(Level::Normal),
            "HARD" => Ok(Level::Hard),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// A registered running course with metadata and a geographic path.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
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

impl Course {
    /// Creates a new Course instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        description: String,
        distance_km: Option<f64>,
        estimated_minutes: Option<i32>,
        level: Level,
        region: String,
        tags: Vec<String>,
        path: Vec<Coordinate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            distance_km,
            estimated_minutes,
            level,
            region,
            tags,
            path,
            created_at,
        }
    }

    /// First point of the path, the map marker position for this course.
    pub fn start_point(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }
}

/// Validated input data for creating a new course.
///
/// All defaulting has already been applied; the path is known to hold at
/// least [`MIN_PATH_POINTS`] in-range coordinates.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub level: Level,
    pub region: String,
    pub tags: Vec<String>,
    pub path: Vec<Coordinate>,
}

/// An unvalidated course submission as received from a client.
///
/// `None` fields were absent from the payload; the service decides between
/// rejecting and defaulting.
#[derive(Debug, Clone, Default)]
pub struct CourseSubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub level: Option<Level>,
    pub region: Option<String>,
    pub tags: Option<Vec<String>>,
    pub path: Option<Vec<Coordinate>>,
}
