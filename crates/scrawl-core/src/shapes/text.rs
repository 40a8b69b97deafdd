//! Text shape.

use super::{new_shape_id, ShapeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font size used when a text shape does not carry its own.
pub const DEFAULT_FONT_SIZE: f64 = 50.0;

/// Average glyph width as a fraction of font size, for the approximate
/// hit-test box.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// A text label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl Text {
    pub fn new(anchor: Point, content: String) -> Self {
        Self {
            id: new_shape_id(),
            x: anchor.x,
            y: anchor.y,
            content,
            font_size: None,
            stroke: None,
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Approximate bounding box: width scales with character count,
    /// height is one line of the font size.
    pub fn bounds(&self) -> Rect {
        let font_size = self.font_size();
        let width = self.content.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO;
        Rect::new(self.x, self.y, self.x + width, self.y + font_size)
    }

    pub fn hit_test(&self, point: Point) -> bool {
        let bounds = self.bounds();
        point.x >= bounds.x0 && point.x <= bounds.x1 && point.y >= bounds.y0 && point.y <= bounds.y1
    }
}
