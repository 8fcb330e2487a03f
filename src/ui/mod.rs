//! Headless UI state for the course list, map, and authoring editor.
//!
//! Rendering is external: a map surface draws the [`map_scene::MapScene`]
//! this module produces and feeds raw click coordinates back into the
//! [`path_editor::PathEditor`] (map background) or [`selection::Selection`]
//! (start markers). Each piece of shared state is a single source of truth
//! mutated only through explicit calls, so dependent views re-render from
//! the same value.
//!
//! # Modules
//!
//! - [`path_editor`] - Ordered point accumulation with undo/clear
//! - [`course_form`] - Submission form state and validation gate
//! - [`selection`] - Selected-course id shared by list and map
//! - [`map_scene`] - Polylines/markers/center for the map surface

pub mod course_form;
pub mod map_scene;
pub mod path_editor;
pub mod selection;

pub use course_form::{CourseForm, FormError, parse_tags};
pub use map_scene::MapScene;
pub use path_editor::PathEditor;
pub use selection::Selection;
