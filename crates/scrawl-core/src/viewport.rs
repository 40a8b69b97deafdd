//! Viewport pan/zoom transform between screen and world space.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Wheel-delta to zoom-factor sensitivity.
pub const ZOOM_SENSITIVITY: f64 = 0.001;

/// Plain serializable viewport record, used by hosts that want to
/// inspect or restore the view (never persisted with the document).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

/// Viewport manages the view transform for the canvas.
///
/// It handles panning (translation) and zooming (scaling) operations,
/// converting between screen coordinates and world coordinates.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Current translation offset (pan), in screen pixels.
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 5.0,
        }
    }
}

impl Viewport {
    /// Create a new viewport with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the affine transform for the render target.
    ///
    /// Converts world coordinates to screen coordinates (scale, then
    /// translate).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        Point::new(
            (screen_point.x - self.offset.x) / self.zoom,
            (screen_point.y - self.offset.y) / self.zoom,
        )
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        Point::new(
            world_point.x * self.zoom + self.offset.x,
            world_point.y * self.zoom + self.offset.y,
        )
    }

    /// Pan the viewport by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom the viewport, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, pivot: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        // Anchor: the world point under the pivot must stay under it.
        let world = self.screen_to_world(pivot);
        self.zoom = new_zoom;
        self.offset = Vec2::new(
            pivot.x - world.x * self.zoom,
            pivot.y - world.y * self.zoom,
        );
    }

    /// Zoom from a wheel delta, anchored at the pivot screen point.
    ///
    /// A positive delta (wheel down) zooms out, negative zooms in.
    pub fn zoom_wheel(&mut self, delta_wheel: f64, pivot: Point) {
        self.zoom_at(pivot, 1.0 - delta_wheel * ZOOM_SENSITIVITY);
    }

    /// Reset to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }

    /// Get the plain state record.
    pub fn state(&self) -> ViewportState {
        ViewportState {
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            zoom: self.zoom,
        }
    }

    /// Restore from a plain state record (zoom is clamped).
    pub fn set_state(&mut self, state: ViewportState) {
        self.offset = Vec2::new(state.offset_x, state.offset_y);
        self.zoom = state.zoom.clamp(self.min_zoom, self.max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::new();
        assert_eq!(viewport.offset, Vec2::ZERO);
        assert!((viewport.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_identity() {
        let viewport = Viewport::new();
        let screen = Point::new(100.0, 200.0);
        let world = viewport.screen_to_world(screen);
        assert!((world.x - screen.x).abs() < f64::EPSILON);
        assert!((world.y - screen.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_with_offset() {
        let mut viewport = Viewport::new();
        viewport.offset = Vec2::new(50.0, 100.0);
        let world = viewport.screen_to_world(Point::new(100.0, 200.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_with_zoom() {
        let mut viewport = Viewport::new();
        viewport.zoom = 2.0;
        let world = viewport.screen_to_world(Point::new(100.0, 200.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut viewport = Viewport::new();
        viewport.offset = Vec2::new(30.0, -20.0);
        viewport.zoom = 1.5;

        let original = Point::new(123.0, 456.0);
        let world = viewport.screen_to_world(original);
        let back = viewport.world_to_screen(world);

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_is_pivot_anchored() {
        let mut viewport = Viewport::new();
        viewport.offset = Vec2::new(40.0, -15.0);
        viewport.zoom = 1.25;

        let pivot = Point::new(320.0, 240.0);
        let before = viewport.screen_to_world(pivot);
        viewport.zoom_wheel(-120.0, pivot);
        let after = viewport.screen_to_world(pivot);

        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
        assert!(viewport.zoom > 1.25);
    }

    #[test]
    fn test_zoom_anchored_even_when_clamped() {
        let mut viewport = Viewport::new();
        viewport.zoom = 4.9;

        let pivot = Point::new(100.0, 100.0);
        let before = viewport.screen_to_world(pivot);
        viewport.zoom_wheel(-10_000.0, pivot);
        let after = viewport.screen_to_world(pivot);

        assert!((viewport.zoom - viewport.max_zoom).abs() < f64::EPSILON);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut viewport = Viewport::new();
        for _ in 0..200 {
            viewport.zoom_wheel(500.0, Point::ZERO);
        }
        assert!((viewport.zoom - viewport.min_zoom).abs() < f64::EPSILON);

        for _ in 0..200 {
            viewport.zoom_wheel(-500.0, Point::ZERO);
        }
        assert!((viewport.zoom - viewport.max_zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan() {
        let mut viewport = Viewport::new();
        viewport.pan(Vec2::new(10.0, 20.0));
        assert!((viewport.offset.x - 10.0).abs() < f64::EPSILON);
        assert!((viewport.offset.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_state_roundtrip() {
        let mut viewport = Viewport::new();
        viewport.pan(Vec2::new(7.0, -3.0));
        viewport.zoom_wheel(-100.0, Point::new(50.0, 50.0));

        let state = viewport.state();
        let mut restored = Viewport::new();
        restored.set_state(state);

        assert!((restored.zoom - viewport.zoom).abs() < f64::EPSILON);
        assert!((restored.offset.x - viewport.offset.x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_state_clamps_zoom() {
        let mut viewport = Viewport::new();
        viewport.set_state(ViewportState {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 99.0,
        });
        assert!((viewport.zoom - viewport.max_zoom).abs() < f64::EPSILON);
    }
}
