//! Region fill: prompt-driven shape generation for a selected region.
//!
//! The session reports a selected region; the controller here owns the
//! prompt surface lifecycle (open, submit, complete or fail, close) and
//! keeps stale completions from landing after the surface moved on. The
//! actual generation backend is abstracted behind [`ShapeGenerator`].

use crate::shapes::Shape;
use crate::BoxFuture;
use kurbo::Rect;
use log::warn;
use std::time::Duration;
use thiserror::Error;

// std's Instant panics on wasm32-unknown-unknown; web-time shims it.
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// How long after opening a prompt surface outside clicks are ignored,
/// so the click that completed the selection cannot close it.
const OUTSIDE_CLICK_GRACE: Duration = Duration::from_millis(100);

/// A request for generated shapes within a region.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// World-space region the generated shapes must fit inside.
    pub bounds: Rect,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("network error: {0}")]
    Network(String),
    #[error("generation service error: {0}")]
    Service(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Backend that turns a request into a JSON array of shape records.
pub trait ShapeGenerator: Send + Sync {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> BoxFuture<'_, Result<serde_json::Value, GenerateError>>;
}

/// Build the instruction prompt sent to the generation backend.
pub fn prompt_for(request: &GenerateRequest) -> String {
    let b = request.bounds;
    format!(
        "Role: Technical Sketch API.\n\
         Task: Convert the user request into a raw JSON array of drawing primitives.\n\
         \n\
         Constraints:\n\
         1. Output strictly valid JSON. NO markdown, NO explanatory text.\n\
         2. Coordinate System: Use the provided bounds: x={x}, y={y}, width={w}, height={h}. \
         All shapes MUST be inside these values.\n\
         3. Supported Tools:\n\
         - {{\"type\":\"rectangle\",\"id\":\"r1\",\"x\":num,\"y\":num,\"width\":num,\"height\":num,\"stroke\":\"white\"}}\n\
         - {{\"type\":\"circle\",\"id\":\"c1\",\"x\":num,\"y\":num,\"radius\":num,\"stroke\":\"white\"}}\n\
         - {{\"type\":\"line\",\"id\":\"l1\",\"x1\":num,\"y1\":num,\"x2\":num,\"y2\":num,\"stroke\":\"white\"}}\n\
         - {{\"type\":\"pencil\",\"id\":\"p1\",\"points\":[{{\"x\":num,\"y\":num}}],\"stroke\":\"white\"}}\n\
         \n\
         Style:\n\
         - Simple, icon-style technical sketches.\n\
         - Use \"pencil\" for curves or irregular shapes.\n\
         - Center the drawing within the provided bounds.\n\
         \n\
         User Request: \"{prompt}\"",
        x = b.x0.round(),
        y = b.y0.round(),
        w = b.width().round(),
        h = b.height().round(),
        prompt = request.prompt,
    )
}

/// Decode a generation response into shapes.
///
/// Tolerant per entry: malformed records are logged and skipped rather
/// than failing the whole batch. Entries carrying a reserved preview id
/// or an empty id are dropped and re-keyed is not attempted.
pub fn parse_generated(value: serde_json::Value) -> Result<Vec<Shape>, GenerateError> {
    let serde_json::Value::Array(entries) = value else {
        return Err(GenerateError::InvalidResponse(
            "expected a JSON array of shapes".to_string(),
        ));
    };
    let mut shapes = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Shape>(entry) {
            Ok(shape) if shape.is_preview() || shape.id().is_empty() => {
                warn!("dropping generated shape with reserved or empty id");
            }
            Ok(shape) => shapes.push(shape),
            Err(err) => warn!("dropping malformed generated shape: {err}"),
        }
    }
    Ok(shapes)
}

/// The open prompt surface for a selected region.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSurface {
    id: u64,
    pub bounds: Rect,
    pub pending: bool,
    pub error: Option<String>,
    opened_at: Instant,
}

/// Ticket identifying one submission; completions carrying a ticket for
/// a surface that has since closed are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    surface_id: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no region is selected")]
    NothingOpen,
    #[error("a generation request is already pending")]
    AlreadyPending,
    #[error("prompt is empty")]
    EmptyPrompt,
}

/// Outcome of completing a submission.
#[derive(Debug)]
pub enum Completion {
    /// Shapes to splice into the document. The surface closed.
    Applied(Vec<Shape>),
    /// The surface changed or closed since submission; discard.
    Stale,
    /// Generation failed; the surface stays open showing the error.
    Failed(String),
}

/// Drives the region-fill prompt lifecycle.
#[derive(Debug, Default)]
pub struct RegionFillController {
    active: Option<PromptSurface>,
    next_id: u64,
}

impl RegionFillController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Option<&PromptSurface> {
        self.active.as_ref()
    }

    /// Open a prompt surface for a freshly selected region. Replaces any
    /// surface already open (its in-flight submission becomes stale).
    pub fn open(&mut self, bounds: Rect) -> &PromptSurface {
        self.next_id += 1;
        self.active.insert(PromptSurface {
            id: self.next_id,
            bounds,
            pending: false,
            error: None,
            opened_at: Instant::now(),
        })
    }

    /// Submit a prompt for the open surface. Returns the ticket to pass
    /// back to [`complete`](Self::complete) and the request to run.
    pub fn begin_submit(
        &mut self,
        prompt: &str,
    ) -> Result<(SubmitTicket, GenerateRequest), SubmitError> {
        let surface = self.active.as_mut().ok_or(SubmitError::NothingOpen)?;
        if surface.pending {
            return Err(SubmitError::AlreadyPending);
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }
        surface.pending = true;
        surface.error = None;
        Ok((
            SubmitTicket {
                surface_id: surface.id,
            },
            GenerateRequest {
                prompt: prompt.to_string(),
                bounds: surface.bounds,
            },
        ))
    }

    /// Feed back the result of a submission.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        result: Result<serde_json::Value, GenerateError>,
    ) -> Completion {
        let Some(surface) = self.active.as_mut() else {
            return Completion::Stale;
        };
        if surface.id != ticket.surface_id {
            return Completion::Stale;
        }
        match result.and_then(parse_generated) {
            Ok(shapes) => {
                self.active = None;
                Completion::Applied(shapes)
            }
            Err(err) => {
                surface.pending = false;
                let message = err.to_string();
                surface.error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }

    /// A click landed outside the prompt surface. Closes it unless the
    /// surface just opened (grace period) or a submission is pending.
    /// Returns true when the surface closed.
    pub fn outside_click(&mut self, now: Instant) -> bool {
        let Some(surface) = &self.active else {
            return false;
        };
        if surface.pending || now.duration_since(surface.opened_at) < OUTSIDE_CLICK_GRACE {
            return false;
        }
        self.active = None;
        true
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
