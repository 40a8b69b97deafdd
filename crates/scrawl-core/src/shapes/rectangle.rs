//! Axis-aligned rectangle shape.

use super::{new_shape_id, ShapeId};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle anchored at its top-left corner.
///
/// Extents are sign-normalized at creation time, so `width`/`height`
/// are never negative once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl Rectangle {
    /// Create a rectangle from two drag corners, in any direction.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            id: new_shape_id(),
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p2.x - p1.x).abs(),
            height: (p2.y - p1.y).abs(),
            stroke: None,
            fill: None,
        }
    }

    /// Get the rectangle as a kurbo Rect (normalized in case stored
    /// data carries negative extents).
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
            .abs()
    }

    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    pub fn hit_test(&self, point: Point) -> bool {
        let rect = self.as_rect();
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }

    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_forward_drag() {
        let rect = Rectangle::from_corners(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        assert!((rect.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.y - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_corners_backward_drag() {
        let rect = Rectangle::from_corners(Point::new(50.0, 40.0), Point::new(10.0, 10.0));
        assert!((rect.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.y - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let rect = Rectangle::from_corners(Point::ZERO, Point::new(100.0, 100.0));
        assert!(rect.hit_test(Point::new(50.0, 50.0)));
        assert!(rect.hit_test(Point::new(100.0, 100.0)));
        assert!(!rect.hit_test(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_hit_test_negative_extents() {
        // Stored data may carry negative extents (e.g. from an external
        // generator); hit-testing normalizes.
        let rect = Rectangle {
            id: "r".to_string(),
            x: 50.0,
            y: 40.0,
            width: -40.0,
            height: -30.0,
            stroke: None,
            fill: None,
        };
        assert!(rect.hit_test(Point::new(30.0, 25.0)));
        assert!(!rect.hit_test(Point::new(60.0, 25.0)));
    }

    #[test]
    fn test_degenerate_is_storable() {
        let rect = Rectangle::from_corners(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!((rect.width).abs() < f64::EPSILON);
        assert!(rect.hit_test(Point::new(5.0, 5.0)));
    }
}
