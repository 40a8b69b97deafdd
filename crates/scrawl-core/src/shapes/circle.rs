//! Circle shape.

use super::{new_shape_id, ShapeId};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle described by its center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ShapeId,
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: new_shape_id(),
            x: center.x,
            y: center.y,
            radius,
            stroke: None,
            fill: None,
        }
    }

    /// Create a circle from a drag: center at the midpoint of the two
    /// points, radius half their distance.
    pub fn from_drag(start: Point, end: Point) -> Self {
        let center = start.midpoint(end);
        let radius = start.distance(end) / 2.0;
        Self::new(center, radius)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.x + self.radius,
            self.y + self.radius,
        )
    }

    pub fn hit_test(&self, point: Point) -> bool {
        point.distance(self.center()) <= self.radius
    }

    pub fn to_path(&self) -> BezPath {
        kurbo::Circle::new(self.center(), self.radius).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drag() {
        let circle = Circle::from_drag(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((circle.x - 5.0).abs() < f64::EPSILON);
        assert!((circle.y).abs() < f64::EPSILON);
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_boundary() {
        let circle = Circle::new(Point::ZERO, 10.0);
        assert!(circle.hit_test(Point::new(10.0, 0.0)));
        assert!(circle.hit_test(Point::new(6.0, 8.0)));
        assert!(!circle.hit_test(Point::new(10.0001, 0.0)));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(5.0, 5.0), 3.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 2.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 8.0).abs() < f64::EPSILON);
    }
}
