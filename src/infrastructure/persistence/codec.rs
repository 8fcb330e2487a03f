//! Encode/decode boundary for the text-serialized course columns.
//!
//! `tags` and `path` live as JSON text blobs inside an otherwise structured
//! row. This pair of functions is the only place that format is produced or
//! consumed; writing a value and reading it back must yield an equal
//! ordered sequence.

use crate::domain::entities::Coordinate;

/// Serializes a tag list into its stored text form.
pub fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).expect("tag list serialization cannot fail")
}

/// Parses a stored tag blob back into an ordered tag list.
pub fn decode_tags(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Serializes a path into its stored text form.
pub fn encode_path(path: &[Coordinate]) -> String {
    serde_json::to_string(path).expect("path serialization cannot fail")
}

/// Parses a stored path blob back into an ordered coordinate sequence.
pub fn decode_path(raw: &str) -> Result<Vec<Coordinate>, serde_json::Error> {
    serde_json::from_str(raw)
}
