//! Display-list renderer.
//!
//! Builds a flat list of drawing commands a host backend (GPU scene,
//! 2D canvas, SVG writer) can replay. Keeping the output inspectable
//! also makes the paint order directly testable.

use crate::color::parse_color;
use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Point, Size};
use peniko::Color;
use scrawl_core::shapes::{Shape, REGION_PREVIEW_ID};

/// Stroke width for shape outlines, in world units.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

fn default_stroke() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target with a color.
    Clear { color: Color, size: Size },
    /// Set the world-to-screen transform for subsequent commands.
    SetTransform(Affine),
    FillPath {
        path: BezPath,
        color: Color,
    },
    StrokePath {
        path: BezPath,
        color: Color,
        width: f64,
        dashed: bool,
    },
    Text {
        origin: Point,
        content: String,
        font_size: f64,
        color: Color,
    },
}

/// Renderer that records draw commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    commands: Vec<DrawCommand>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded by the last frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn emit_shape(&mut self, shape: &Shape) {
        if let Shape::Text(text) = shape {
            if text.content.is_empty() {
                return;
            }
            self.commands.push(DrawCommand::Text {
                origin: text.anchor(),
                content: text.content.clone(),
                font_size: text.font_size(),
                color: text
                    .stroke
                    .as_deref()
                    .and_then(parse_color)
                    .unwrap_or_else(default_stroke),
            });
            return;
        }

        let path = shape.to_path();
        if path.elements().is_empty() {
            return;
        }
        // A zero-extent rectangle or circle drag leaves nothing to draw.
        // Pencil is exempt: a single-point stroke has zero bounds but
        // still draws its dot.
        if matches!(shape, Shape::Rectangle(_) | Shape::Circle(_)) {
            let bounds = shape.bounds();
            if bounds.width() == 0.0 && bounds.height() == 0.0 {
                return;
            }
        }

        if let Some(fill) = shape.fill().and_then(parse_color) {
            self.commands.push(DrawCommand::FillPath {
                path: path.clone(),
                color: fill,
            });
        }
        self.commands.push(DrawCommand::StrokePath {
            path,
            color: shape
                .stroke()
                .and_then(parse_color)
                .unwrap_or_else(default_stroke),
            width: DEFAULT_STROKE_WIDTH,
            dashed: shape.id() == REGION_PREVIEW_ID,
        });
    }
}

impl Renderer for SceneRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            color: ctx.background_color,
            size: ctx.viewport_size,
        });
        self.commands
            .push(DrawCommand::SetTransform(ctx.viewport.transform()));

        for shape in ctx.shapes.iter().chain(ctx.previews.iter()) {
            self.emit_shape(shape);
        }
    }
}
