//! The sketching session: routes pointer input through the active tool,
//! the viewport, and the document, and manages text entry.

use crate::document::Document;
use crate::input::{Modifiers, MouseButton, PointerEvent};
use crate::shapes::{Shape, Text, DEFAULT_FONT_SIZE};
use crate::tools::{ToolKind, ToolManager, MIN_REGION_SIZE};
use crate::viewport::Viewport;
use kurbo::{Point, Rect};

/// Something the host should react to after feeding input in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Committed shapes changed; re-render and persist.
    DocumentChanged,
    /// Pan or zoom changed; re-render.
    ViewChanged,
    /// A region-fill selection was completed (world coordinates).
    RegionSelected(Rect),
    /// A text editor should be opened at the given screen position.
    TextEditOpened {
        screen_position: Point,
        /// Font size in screen pixels, scaled by the current zoom.
        font_px: f64,
    },
}

/// Keys the text editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

/// An open inline text entry, anchored in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEdit {
    pub anchor: Point,
    pub buffer: String,
}

/// Owns the document, the viewport and the tool machine, and turns raw
/// pointer events into state changes.
#[derive(Debug, Default)]
pub struct Session {
    document: Document,
    viewport: Viewport,
    tools: ToolManager,
    text_edit: Option<TextEdit>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.tool()
    }

    pub fn text_edit(&self) -> Option<&TextEdit> {
        self.text_edit.as_ref()
    }

    /// Switch tools. An open text entry is committed first; any drag in
    /// progress is discarded.
    pub fn set_tool(&mut self, tool: ToolKind) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.commit_text_into(&mut events);
        self.tools.set_tool(tool);
        events
    }

    /// Feed one pointer event (screen coordinates) into the session.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        modifiers: Modifiers,
    ) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                // A click anywhere outside the editor commits the entry.
                self.commit_text_into(&mut events);
                self.pointer_down(position, &mut events);
            }
            PointerEvent::Move { position } => {
                self.pointer_move(position, &mut events);
            }
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer_up(position, &mut events);
            }
            PointerEvent::Scroll { position, delta } => {
                if modifiers.ctrl {
                    self.viewport.zoom_wheel(delta.y, position);
                } else {
                    self.viewport.pan(-delta);
                }
                events.push(SessionEvent::ViewChanged);
            }
            // Secondary buttons are not bound to anything.
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => {}
        }
        events
    }

    fn pointer_down(&mut self, position: Point, events: &mut Vec<SessionEvent>) {
        match self.tools.tool() {
            // Pan drags track screen coordinates.
            ToolKind::Pan => self.tools.begin(position),
            ToolKind::Text => {
                let anchor = self.viewport.screen_to_world(position);
                self.text_edit = Some(TextEdit {
                    anchor,
                    buffer: String::new(),
                });
                events.push(SessionEvent::TextEditOpened {
                    screen_position: position,
                    font_px: DEFAULT_FONT_SIZE * self.viewport.zoom,
                });
            }
            ToolKind::Eraser => {
                self.tools.begin(position);
                self.erase_at(self.viewport.screen_to_world(position), events);
            }
            _ => self.tools.begin(self.viewport.screen_to_world(position)),
        }
    }

    fn pointer_move(&mut self, position: Point, events: &mut Vec<SessionEvent>) {
        if self.tools.is_panning() {
            if let Some(delta) = self.tools.update(position) {
                self.viewport.pan(delta);
                events.push(SessionEvent::ViewChanged);
            }
        } else if self.tools.is_erasing() {
            self.erase_at(self.viewport.screen_to_world(position), events);
        } else {
            self.tools.update(self.viewport.screen_to_world(position));
        }
    }

    fn pointer_up(&mut self, position: Point, events: &mut Vec<SessionEvent>) {
        let world = self.viewport.screen_to_world(position);
        if self.tools.tool() == ToolKind::RegionFill {
            if let Some((start, _)) = self.tools.active_span() {
                let region = Rect::from_points(start, world);
                if region.width() > MIN_REGION_SIZE && region.height() > MIN_REGION_SIZE {
                    events.push(SessionEvent::RegionSelected(region));
                }
            }
            self.tools.cancel();
            return;
        }
        if let Some(shape) = self.tools.end(world) {
            self.document.add_shape(shape);
            events.push(SessionEvent::DocumentChanged);
        }
    }

    fn erase_at(&mut self, world: Point, events: &mut Vec<SessionEvent>) {
        if let Some(id) = self.document.shape_at(world).map(|s| s.id().to_string()) {
            self.document.remove_shape(&id);
            events.push(SessionEvent::DocumentChanged);
        }
    }

    /// Append typed characters to the open text entry, if any.
    pub fn text_input(&mut self, input: &str) {
        if let Some(edit) = &mut self.text_edit {
            edit.buffer.push_str(input);
        }
    }

    /// React to an editing key. Enter commits (Shift+Enter inserts a
    /// newline instead), Escape discards.
    pub fn handle_text_key(&mut self, key: EditKey, shift: bool) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match key {
            EditKey::Enter if shift => self.text_input("\n"),
            EditKey::Enter => self.commit_text_into(&mut events),
            EditKey::Escape => self.cancel_text(),
        }
        events
    }

    /// Commit the open text entry as a shape. Whitespace-only entries
    /// are dropped. Safe to call when no entry is open.
    pub fn commit_text(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.commit_text_into(&mut events);
        events
    }

    fn commit_text_into(&mut self, events: &mut Vec<SessionEvent>) {
        // Taking the entry first makes commit idempotent even if the
        // host calls back into the session while reacting.
        let Some(edit) = self.text_edit.take() else {
            return;
        };
        if edit.buffer.trim().is_empty() {
            return;
        }
        self.document
            .add_shape(Shape::Text(Text::new(edit.anchor, edit.buffer)));
        events.push(SessionEvent::DocumentChanged);
    }

    /// Discard the open text entry.
    pub fn cancel_text(&mut self) {
        self.text_edit = None;
    }

    /// Remove every committed shape.
    pub fn clear(&mut self) -> Vec<SessionEvent> {
        self.tools.cancel();
        self.text_edit = None;
        if self.document.is_empty() {
            return Vec::new();
        }
        self.document.clear();
        vec![SessionEvent::DocumentChanged]
    }

    /// Replace the document contents, e.g. when restoring a snapshot.
    pub fn restore(&mut self, shapes: Vec<Shape>) {
        self.document.clear();
        self.document.extend(shapes);
    }

    /// Append externally generated shapes to the document.
    pub fn splice_generated(&mut self, shapes: Vec<Shape>) -> Vec<SessionEvent> {
        if shapes.is_empty() {
            return Vec::new();
        }
        self.document.extend(shapes);
        vec![SessionEvent::DocumentChanged]
    }

    /// Ephemeral shapes to draw on top of the document this frame.
    pub fn preview_shapes(&self) -> Vec<Shape> {
        self.tools.preview().into_iter().collect()
    }
}
