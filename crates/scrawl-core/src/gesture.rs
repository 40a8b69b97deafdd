//! Hand-gesture input bridge.
//!
//! Converts tracked hand landmarks into the same pointer events a mouse
//! would produce, so the session logic stays input-agnostic. A pinch
//! between the index and middle fingertips acts as the button.

use crate::input::{MouseButton, PointerEvent};
use kurbo::{Point, Size};
use serde::Deserialize;
use thiserror::Error;

/// Landmark index of the index fingertip.
pub const INDEX_TIP: usize = 8;
/// Landmark index of the middle fingertip.
pub const MIDDLE_TIP: usize = 12;

/// Exponential smoothing factor applied to the cursor position.
const SMOOTHING_FACTOR: f64 = 0.5;
/// Normalized fingertip distance below which the hand counts as pinched.
const PINCH_THRESHOLD: f64 = 0.06;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("camera unavailable: {0}")]
    Camera(String),
    #[error("hand tracker failed: {0}")]
    Tracker(String),
}

/// One tracked landmark in normalized camera coordinates ([0, 1]).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// One frame of tracking output: zero or more hands, each a list of
/// landmarks indexed by the tracker's landmark scheme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandFrame {
    pub hands: Vec<Vec<Landmark>>,
}

/// Source of hand-tracking frames (camera plus model, typically).
pub trait HandTracker: Send {
    /// Poll for the next frame. `Ok(None)` means no new frame yet.
    fn poll(&mut self) -> Result<Option<HandFrame>, GestureError>;

    /// Release the camera and any tracker resources.
    fn stop(&mut self);
}

/// On-screen cursor feedback for the tracked hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorIndicator {
    pub position: Point,
    pub pinched: bool,
}

/// Translates hand frames into synthetic pointer events.
#[derive(Debug)]
pub struct GestureBridge {
    cursor: Point,
    pinched: bool,
    screen: Size,
    started: bool,
}

impl GestureBridge {
    pub fn new(screen: Size) -> Self {
        Self {
            cursor: Point::ZERO,
            pinched: false,
            screen,
            started: false,
        }
    }

    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Current cursor state, for drawing the hand indicator.
    pub fn cursor(&self) -> CursorIndicator {
        CursorIndicator {
            position: self.cursor,
            pinched: self.pinched,
        }
    }

    /// Whether a pinch drag is currently in progress.
    pub fn is_pinched(&self) -> bool {
        self.pinched
    }

    /// Consume one tracking frame and emit the pointer events it implies.
    ///
    /// Frames with no hands (or too few landmarks) leave the state
    /// untouched so a momentary tracking dropout does not end a stroke.
    pub fn process(&mut self, frame: &HandFrame) -> Vec<PointerEvent> {
        let Some(hand) = frame.hands.first() else {
            return Vec::new();
        };
        let (Some(index_tip), Some(middle_tip)) =
            (hand.get(INDEX_TIP), hand.get(MIDDLE_TIP))
        else {
            return Vec::new();
        };

        // The camera image is mirrored relative to the user, so flip x.
        let raw = Point::new(
            (1.0 - index_tip.x) * self.screen.width,
            index_tip.y * self.screen.height,
        );
        let target = if self.started {
            Point::new(
                self.cursor.x + (raw.x - self.cursor.x) * SMOOTHING_FACTOR,
                self.cursor.y + (raw.y - self.cursor.y) * SMOOTHING_FACTOR,
            )
        } else {
            raw
        };
        self.cursor = target;
        self.started = true;

        // Pinch distance in mirrored normalized coordinates.
        let dx = (1.0 - index_tip.x) - (1.0 - middle_tip.x);
        let dy = index_tip.y - middle_tip.y;
        let pinched_now = dx.hypot(dy) < PINCH_THRESHOLD;

        let mut events = Vec::new();
        match (self.pinched, pinched_now) {
            (false, true) => events.push(PointerEvent::Down {
                position: self.cursor,
                button: MouseButton::Left,
            }),
            (true, false) => events.push(PointerEvent::Up {
                position: self.cursor,
                button: MouseButton::Left,
            }),
            _ => events.push(PointerEvent::Move {
                position: self.cursor,
            }),
        }
        self.pinched = pinched_now;
        events
    }

    /// End any pinch in progress, returning the closing event.
    pub fn release(&mut self) -> Option<PointerEvent> {
        if !self.pinched {
            return None;
        }
        self.pinched = false;
        Some(PointerEvent::Up {
            position: self.cursor,
            button: MouseButton::Left,
        })
    }
}

/// Couples a tracker to a bridge and manages its lifecycle.
pub struct GestureSession<T: HandTracker> {
    tracker: T,
    bridge: GestureBridge,
    running: bool,
}

impl<T: HandTracker> GestureSession<T> {
    pub fn new(tracker: T, screen: Size) -> Self {
        Self {
            tracker,
            bridge: GestureBridge::new(screen),
            running: true,
        }
    }

    pub fn bridge(&self) -> &GestureBridge {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut GestureBridge {
        &mut self.bridge
    }

    /// Poll the tracker once and translate any new frame.
    pub fn sample(&mut self) -> Result<Vec<PointerEvent>, GestureError> {
        if !self.running {
            return Ok(Vec::new());
        }
        match self.tracker.poll()? {
            Some(frame) => Ok(self.bridge.process(&frame)),
            None => Ok(Vec::new()),
        }
    }

    /// Stop tracking. A pinch still in progress emits its closing Up
    /// event so no stroke is left dangling.
    pub fn stop(&mut self) -> Vec<PointerEvent> {
        if !self.running {
            return Vec::new();
        }
        self.running = false;
        self.tracker.stop();
        self.bridge.release().into_iter().collect()
    }
}

impl<T: HandTracker> Drop for GestureSession<T> {
    fn drop(&mut self) {
        if self.running {
            self.tracker.stop();
        }
    }
}
