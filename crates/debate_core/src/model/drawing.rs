//! Freehand drawing model.
//!
//! # Invariants
//! - Canvas size is fixed at creation.
//! - Strokes are append-only and immutable once captured.

use super::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// One captured canvas coordinate. Serialized as `{x, y}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// One pen stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub stroke_width: f32,
    /// Free-form color, e.g. `red` or `#ff0000`.
    pub color: String,
    pub timestamp: Timestamp,
}

/// A canvas with its captured strokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: EntityId,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Free-form note reference. Not validated against note ids.
    pub associated_note_id: Option<String>,
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// Builds an empty drawing. An empty `note_ref` means no association.
    pub fn new(id: EntityId, canvas_width: f32, canvas_height: f32, note_ref: &str) -> Self {
        Self {
            id,
            canvas_width,
            canvas_height,
            associated_note_id: (!note_ref.is_empty()).then(|| note_ref.to_string()),
            strokes: Vec::new(),
        }
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::Drawing;

    #[test]
    fn empty_note_ref_means_no_association() {
        assert_eq!(Drawing::new(1, 10.0, 10.0, "").associated_note_id, None);
        assert_eq!(
            Drawing::new(2, 10.0, 10.0, "note-7").associated_note_id.as_deref(),
            Some("note-7")
        );
    }
}
