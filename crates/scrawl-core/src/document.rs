//! The shape document: an ordered collection of committed shapes.

use crate::shapes::Shape;
use kurbo::Point;

/// Ordered collection of committed shapes. Order is paint order:
/// later shapes draw on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Append a batch of shapes, preserving their order.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Remove a shape by id, returning it if present.
    pub fn remove_shape(&mut self, id: &str) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Find the topmost shape under a world-space point.
    ///
    /// Iterates in reverse paint order so that the shape drawn last wins.
    /// Preview shapes are never hit.
    pub fn shape_at(&self, point: Point) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| !s.is_preview())
            .find(|s| s.hit_test(point))
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Serialize all shapes as a single JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.shapes)
    }

    /// Restore a document from a JSON array of shapes.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        Ok(Self {
            shapes: serde_json::from_str(data)?,
        })
    }
}
