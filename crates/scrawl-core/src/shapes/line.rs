//! Straight line segment shape.

use super::{new_shape_id, point_to_segment_dist, ShapeId, HIT_TOLERANCE};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single straight segment from (x1, y1) to (x2, y2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: ShapeId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: new_shape_id(),
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            stroke: None,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2, self.y2).abs()
    }

    pub fn hit_test(&self, point: Point) -> bool {
        point_to_segment_dist(point, self.start(), self.end()) <= HIT_TOLERANCE
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start());
        path.line_to(self.end());
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_near_segment() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 4.0)));
        assert!(!line.hit_test(Point::new(50.0, 6.0)));
    }

    #[test]
    fn test_hit_beyond_endpoint_clamps() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(103.0, 0.0)));
        assert!(!line.hit_test(Point::new(106.0, 0.0)));
    }

    #[test]
    fn test_bounds_normalized() {
        let line = Line::new(Point::new(80.0, 90.0), Point::new(10.0, 20.0));
        let bounds = line.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 90.0).abs() < f64::EPSILON);
    }
}
