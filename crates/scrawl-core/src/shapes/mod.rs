//! Shape definitions for the sketching canvas.
//!
//! Shapes are a closed tagged union serialized with an external `"type"`
//! tag; the same format is used for the snapshot store and for entries
//! returned by the shape-generation contract.

mod circle;
mod line;
mod pencil;
mod rectangle;
mod text;

pub use circle::Circle;
pub use line::Line;
pub use pencil::Pencil;
pub use rectangle::Rectangle;
pub use text::{Text, DEFAULT_FONT_SIZE};

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes (uuid-v4, stringified on the wire).
pub type ShapeId = String;

/// Reserved id of the ephemeral in-progress stroke preview.
/// Shapes carrying it are never persisted and never hit-tested.
pub const PREVIEW_ID: &str = "preview";

/// Reserved id of the region-fill selection preview (rendered dashed).
pub const REGION_PREVIEW_ID: &str = "preview-ai";

/// World-space distance within which lines and pencil points register a hit.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Generate a fresh shape id.
pub fn new_shape_id() -> ShapeId {
    Uuid::new_v4().to_string()
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Pencil(Pencil),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> &str {
        match self {
            Shape::Rectangle(s) => &s.id,
            Shape::Circle(s) => &s.id,
            Shape::Line(s) => &s.id,
            Shape::Pencil(s) => &s.id,
            Shape::Text(s) => &s.id,
        }
    }

    /// Check whether this shape is an ephemeral preview.
    pub fn is_preview(&self) -> bool {
        self.id() == PREVIEW_ID || self.id() == REGION_PREVIEW_ID
    }

    /// Replace the id with the stroke-preview sentinel.
    pub fn into_preview(mut self) -> Self {
        self.set_id(PREVIEW_ID.to_string());
        self
    }

    pub(crate) fn set_id(&mut self, id: ShapeId) {
        match self {
            Shape::Rectangle(s) => s.id = id,
            Shape::Circle(s) => s.id = id,
            Shape::Line(s) => s.id = id,
            Shape::Pencil(s) => s.id = id,
            Shape::Text(s) => s.id = id,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Pencil(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    /// Check if a world-space point hits this shape.
    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Circle(s) => s.hit_test(point),
            Shape::Line(s) => s.hit_test(point),
            Shape::Pencil(s) => s.hit_test(point),
            Shape::Text(s) => s.hit_test(point),
        }
    }

    /// Get the path representation for rendering.
    ///
    /// Text has no path; it is drawn by the renderer's text facility.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Pencil(s) => s.to_path(),
            Shape::Text(_) => BezPath::new(),
        }
    }

    /// Stroke color string, if one was set.
    pub fn stroke(&self) -> Option<&str> {
        match self {
            Shape::Rectangle(s) => s.stroke.as_deref(),
            Shape::Circle(s) => s.stroke.as_deref(),
            Shape::Line(s) => s.stroke.as_deref(),
            Shape::Pencil(s) => s.stroke.as_deref(),
            Shape::Text(s) => s.stroke.as_deref(),
        }
    }

    /// Fill color string, if one was set (only rectangles and circles).
    pub fn fill(&self) -> Option<&str> {
        match self {
            Shape::Rectangle(s) => s.fill.as_deref(),
            Shape::Circle(s) => s.fill.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_serialization() {
        let rect = Shape::Rectangle(Rectangle::from_corners(
            Point::new(10.0, 10.0),
            Point::new(50.0, 40.0),
        ));
        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["type"], "rectangle");
        assert_eq!(json["x"], 10.0);
        assert_eq!(json["width"], 40.0);
        assert_eq!(json["height"], 30.0);
        assert!(json.get("stroke").is_none());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result: Result<Shape, _> = serde_json::from_str(
            r#"{"type":"blob","id":"x","x":0,"y":0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_text_font_size_field_name() {
        let mut text = Text::new(Point::new(1.0, 2.0), "hi".to_string());
        text.font_size = Some(32.0);
        let json = serde_json::to_value(Shape::Text(text)).unwrap();
        assert_eq!(json["fontSize"], 32.0);
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_preview_sentinel() {
        let line = Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0)));
        assert!(!line.is_preview());
        let preview = line.into_preview();
        assert!(preview.is_preview());
        assert_eq!(preview.id(), PREVIEW_ID);
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
        // Beyond the endpoint the projection clamps to the endpoint.
        assert!((point_to_segment_dist(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        // Degenerate segment.
        assert!((point_to_segment_dist(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-12);
    }
}
