//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use scrawl_core::shapes::Shape;
use scrawl_core::viewport::Viewport;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Committed shapes, in paint order.
    pub shapes: &'a [Shape],
    /// Ephemeral previews, drawn after (on top of) the document.
    pub previews: &'a [Shape],
    /// Viewport transform to apply to world-space shapes.
    pub viewport: &'a Viewport,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a context with the canvas's black background.
    pub fn new(shapes: &'a [Shape], viewport: &'a Viewport, viewport_size: Size) -> Self {
        Self {
            shapes,
            previews: &[],
            viewport,
            viewport_size,
            background_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    /// Set the preview shapes for this frame.
    pub fn with_previews(mut self, previews: &'a [Shape]) -> Self {
        self.previews = previews;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame with the full document; implementations
    /// redraw from scratch.
    fn build_scene(&mut self, ctx: &RenderContext);
}
