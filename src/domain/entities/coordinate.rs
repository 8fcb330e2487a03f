//! Geographic coordinate used in course paths.

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in degrees.
///
/// Wire names are `lat`/`lng` to match the map surface and the stored
/// path representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checking.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if the coordinate lies within valid geographic ranges.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
