//! Scrawl Render Library
//!
//! Renderer abstraction and the default display-list implementation for
//! the Scrawl sketching canvas.

mod color;
mod renderer;
mod scene;

pub use color::parse_color;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use scene::{DrawCommand, SceneRenderer, DEFAULT_STROKE_WIDTH};
