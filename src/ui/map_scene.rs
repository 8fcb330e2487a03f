//! View-model handed to the external map-rendering surface.

use crate::domain::entities::{Coordinate, Course};
use crate::ui::selection::Selection;

/// Initial viewport center when no course provides one (Seoul City Hall).
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 37.5665,
    lng: 126.978,
};

/// Stroke weight for the selected course's polyline.
pub const SELECTED_STROKE_WEIGHT: u32 = 6;
/// Stroke weight for unselected polylines.
pub const STROKE_WEIGHT: u32 = 4;

/// One course path drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub course_id: i64,
    pub points: Vec<Coordinate>,
    /// Stroke-weight hint; the selected course draws wider.
    pub weight: u32,
}

/// A clickable start marker for a course.
///
/// Carries the label data the surface shows in a popup and the course id
/// the embedding application routes back to [`Selection::select`] when the
/// marker is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub course_id: i64,
    pub position: Coordinate,
    pub title: String,
    pub region: String,
    pub distance_km: Option<f64>,
}

/// Everything the map surface needs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: Coordinate,
    pub polylines: Vec<Polyline>,
    pub markers: Vec<Marker>,
}

impl MapScene {
    /// Builds the scene for a course list and the current selection.
    ///
    /// Courses with empty paths are skipped entirely. The center is the
    /// first path point of the resolved selection (selected course, else
    /// the first in the list), or [`DEFAULT_CENTER`] when neither exists.
    pub fn build(courses: &[Course], selection: &Selection) -> Self {
        let center = selection
            .resolve(courses)
            .and_then(Course::start_point)
            .unwrap_or(DEFAULT_CENTER);

        let polylines = courses
            .iter()
            .filter(|c| !c.path.is_empty())
            .map(|c| Polyline {
                course_id: c.id,
                points: c.path.clone(),
                weight: if selection.is_selected(c.id) {
                    SELECTED_STROKE_WEIGHT
                } else {
                    STROKE_WEIGHT
                },
            })
            .collect();

        let markers = courses
            .iter()
            .filter_map(|c| {
                c.start_point().map(|position| Marker {
                    course_id: c.id,
                    position,
                    title: c.title.clone(),
                    region: c.region.clone(),
                    distance_km: c.distance_km,
                })
            })
            .collect();

        Self {
            center,
            polylines,
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Level;
    use chrono::Utc;

    fn course(id: i64, path: Vec<Coordinate>) -> Course {
        Course::new(
            id,
            format!("course {id}"),
            String::new(),
            Some(5.0),
            None,
            Level::Easy,
            "Seoul".to_string(),
            vec![],
            path,
            Utc::now(),
        )
    }

    fn two_courses() -> Vec<Course> {
        vec![
            course(
                1,
                vec![Coordinate::new(37.53, 127.06), Coordinate::new(37.54, 127.07)],
            ),
            course(
                2,
                vec![Coordinate::new(37.51, 127.12), Coordinate::new(37.52, 127.13)],
            ),
        ]
    }

    #[test]
    fn test_selected_polyline_is_wider() {
        let courses = two_courses();
        let mut selection = Selection::new();
        selection.select(2);

        let scene = MapScene::build(&courses, &selection);
        assert_eq!(scene.polylines[0].weight, STROKE_WEIGHT);
        assert_eq!(scene.polylines[1].weight, SELECTED_STROKE_WEIGHT);
    }

    #[test]
    fn test_center_follows_selection() {
        let courses = two_courses();
        let mut selection = Selection::new();
        selection.select(2);

        let scene = MapScene::build(&courses, &selection);
        assert_eq!(scene.center, Coordinate::new(37.51, 127.12));
    }

    #[test]
    fn test_center_defaults_to_first_course() {
        let courses = two_courses();
        let scene = MapScene::build(&courses, &Selection::new());
        assert_eq!(scene.center, Coordinate::new(37.53, 127.06));
    }

    #[test]
    fn test_center_default_when_no_courses() {
        let scene = MapScene::build(&[], &Selection::new());
        assert_eq!(scene.center, DEFAULT_CENTER);
        assert!(scene.polylines.is_empty());
        assert!(scene.markers.is_empty());
    }

    #[test]
    fn test_empty_path_courses_are_skipped() {
        let courses = vec![course(1, vec![]), two_courses().remove(1)];
        let scene = MapScene::build(&courses, &Selection::new());

        assert_eq!(scene.polylines.len(), 1);
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.polylines[0].course_id, 2);
    }

    #[test]
    fn test_marker_carries_label_data() {
        let courses = two_courses();
        let scene = MapScene::build(&courses, &Selection::new());

        let marker = &scene.markers[0];
        assert_eq!(marker.course_id, 1);
        assert_eq!(marker.title, "course 1");
        assert_eq!(marker.region, "Seoul");
        assert_eq!(marker.distance_km, Some(5.0));
        assert_eq!(marker.position, Coordinate::new(37.53, 127.06));
    }
}
