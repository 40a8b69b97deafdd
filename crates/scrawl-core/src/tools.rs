//! Drawing tools and the per-gesture tool state machine.

use crate::shapes::{Circle, Line, Pencil, Rectangle, Shape, REGION_PREVIEW_ID};
use kurbo::{Point, Vec2};

/// Width and height (world units) a region-fill selection must exceed
/// to be accepted.
pub const MIN_REGION_SIZE: f64 = 20.0;

/// Stroke color of the region-fill selection preview.
pub const REGION_STROKE: &str = "#8A2BE2";
/// Fill color of the region-fill selection preview.
pub const REGION_FILL: &str = "rgba(138, 43, 226, 0.05)";

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    Pan,
    Rectangle,
    Circle,
    Line,
    #[default]
    Pencil,
    Text,
    Eraser,
    RegionFill,
}

/// State of the active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolState {
    Idle,
    /// A drag-to-draw gesture in progress (world coordinates).
    Drawing { start: Point, current: Point },
    /// A pan drag in progress (screen coordinates).
    Panning { last: Point },
    /// The eraser is held down.
    Erasing,
}

/// Tracks the active tool and the in-flight gesture.
///
/// Exactly one gesture is active at a time; switching tools cancels it.
#[derive(Debug)]
pub struct ToolManager {
    tool: ToolKind,
    state: ToolState,
    stroke: Vec<Point>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    pub fn new() -> Self {
        Self {
            tool: ToolKind::default(),
            state: ToolState::Idle,
            stroke: Vec::new(),
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. Any gesture in progress is discarded.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.cancel();
        self.tool = tool;
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, ToolState::Panning { .. })
    }

    pub fn is_erasing(&self) -> bool {
        matches!(self.state, ToolState::Erasing)
    }

    /// Start a gesture at `point`. Pan gestures take screen coordinates,
    /// drawing gestures world coordinates.
    pub fn begin(&mut self, point: Point) {
        match self.tool {
            ToolKind::Pan => {
                self.state = ToolState::Panning { last: point };
            }
            ToolKind::Eraser => {
                self.state = ToolState::Erasing;
            }
            // Text placement happens on the down event itself; there is
            // no drag gesture to track.
            ToolKind::Text => {}
            _ => {
                self.stroke.clear();
                if self.tool == ToolKind::Pencil {
                    self.stroke.push(point);
                }
                self.state = ToolState::Drawing {
                    start: point,
                    current: point,
                };
            }
        }
    }

    /// Advance the gesture to `point`. Returns the pan delta when a pan
    /// is in progress.
    pub fn update(&mut self, point: Point) -> Option<Vec2> {
        match &mut self.state {
            ToolState::Panning { last } => {
                let delta = point - *last;
                *last = point;
                Some(delta)
            }
            ToolState::Drawing { current, .. } => {
                *current = point;
                if self.tool == ToolKind::Pencil {
                    self.stroke.push(point);
                }
                None
            }
            _ => None,
        }
    }

    /// Finish the gesture, committing a shape for the drawing tools.
    ///
    /// Region-fill selections produce no shape here; read
    /// [`active_span`](Self::active_span) before calling.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        let state = std::mem::replace(&mut self.state, ToolState::Idle);
        let ToolState::Drawing { start, .. } = state else {
            self.stroke.clear();
            return None;
        };
        match self.tool {
            ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::from_corners(start, point))),
            ToolKind::Circle => Some(Shape::Circle(Circle::from_drag(start, point))),
            ToolKind::Line => Some(Shape::Line(Line::new(start, point))),
            ToolKind::Pencil => {
                let points = std::mem::take(&mut self.stroke);
                Some(Shape::Pencil(Pencil::from_points(points)))
            }
            _ => None,
        }
    }

    /// Discard the gesture in progress.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
        self.stroke.clear();
    }

    /// The start/current pair of an in-progress drawing gesture.
    pub fn active_span(&self) -> Option<(Point, Point)> {
        match self.state {
            ToolState::Drawing { start, current } => Some((start, current)),
            _ => None,
        }
    }

    /// Ephemeral preview of the gesture in progress, if any.
    pub fn preview(&self) -> Option<Shape> {
        let (start, current) = self.active_span()?;
        match self.tool {
            ToolKind::Rectangle => {
                Some(Shape::Rectangle(Rectangle::from_corners(start, current)).into_preview())
            }
            ToolKind::Circle => {
                Some(Shape::Circle(Circle::from_drag(start, current)).into_preview())
            }
            ToolKind::Line => Some(Shape::Line(Line::new(start, current)).into_preview()),
            ToolKind::Pencil => {
                Some(Shape::Pencil(Pencil::from_points(self.stroke.clone())).into_preview())
            }
            ToolKind::RegionFill => {
                let mut rect = Rectangle::from_corners(start, current);
                rect.id = REGION_PREVIEW_ID.to_string();
                rect.stroke = Some(REGION_STROKE.to_string());
                rect.fill = Some(REGION_FILL.to_string());
                Some(Shape::Rectangle(rect))
            }
            _ => None,
        }
    }
}
