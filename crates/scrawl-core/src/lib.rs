//! Scrawl Core Library
//!
//! Platform-agnostic model and logic for the Scrawl sketching canvas:
//! the viewport transform, the shape document, tools, gesture input,
//! region fill and snapshot persistence.

pub mod collaboration;
pub mod document;
pub mod generate;
pub mod gesture;
pub mod input;
pub mod session;
pub mod shapes;
pub mod storage;
pub mod tools;
pub mod viewport;

pub use document::Document;
pub use generate::{
    Completion, GenerateError, GenerateRequest, RegionFillController, ShapeGenerator,
    SubmitError, SubmitTicket,
};
pub use gesture::{CursorIndicator, GestureBridge, GestureError, GestureSession, HandTracker};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use session::{EditKey, Session, SessionEvent, TextEdit};
pub use shapes::{Shape, ShapeId};
pub use storage::{BoxFuture, SnapshotStore, StorageError};
pub use tools::{ToolKind, ToolManager, ToolState};
pub use viewport::{Viewport, ViewportState};
