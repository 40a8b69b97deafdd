//! Freehand pencil stroke shape.

use super::{new_shape_id, ShapeId, HIT_TOLERANCE};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Radius of the dot drawn for a single-point stroke.
const DOT_RADIUS: f64 = 1.2;

/// A freehand stroke: an ordered list of recorded pointer positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pencil {
    pub id: ShapeId,
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl Pencil {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: new_shape_id(),
            points,
            stroke: None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        let mut rect = Rect::from_points(*first, *first);
        for p in iter {
            rect = rect.union_pt(*p);
        }
        rect
    }

    /// A pencil stroke is hit when the point lies within tolerance of
    /// any recorded point (not the interpolated curve).
    pub fn hit_test(&self, point: Point) -> bool {
        self.points.iter().any(|p| p.distance(point) <= HIT_TOLERANCE)
    }

    /// Smoothed path: quadratic curves through the midpoints of
    /// adjacent samples. A single point degenerates to a small dot.
    pub fn to_path(&self) -> BezPath {
        match self.points.as_slice() {
            [] => BezPath::new(),
            [p] => kurbo::Circle::new(*p, DOT_RADIUS).to_path(0.1),
            points => {
                let mut path = BezPath::new();
                path.move_to(points[0]);
                for window in points[1..].windows(2) {
                    let mid = window[0].midpoint(window[1]);
                    path.quad_to(window[0], mid);
                }
                path.line_to(points[points.len() - 1]);
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_hit_on_recorded_point_only() {
        let pencil = Pencil::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        ]);
        assert!(pencil.hit_test(Point::new(3.0, 0.0)));
        // Midway between recorded points is not a hit, by design of the
        // point-based test.
        assert!(!pencil.hit_test(Point::new(50.0, 0.0)));
    }

    #[test]
    fn test_single_point_renders_dot() {
        let pencil = Pencil::from_points(vec![Point::new(10.0, 10.0)]);
        let path = pencil.to_path();
        assert!(!path.elements().is_empty());
    }

    #[test]
    fn test_empty_renders_nothing() {
        let pencil = Pencil::from_points(Vec::new());
        assert!(pencil.to_path().elements().is_empty());
        assert!(!pencil.hit_test(Point::ZERO));
    }

    #[test]
    fn test_smoothed_path_uses_quads() {
        let pencil = Pencil::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 0.0),
        ]);
        let path = pencil.to_path();
        assert!(path
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::QuadTo(..))));
        assert!(matches!(path.elements().last(), Some(PathEl::LineTo(_))));
    }

    #[test]
    fn test_bounds() {
        let pencil = Pencil::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 100.0),
        ]);
        let bounds = pencil.bounds();
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }
}
