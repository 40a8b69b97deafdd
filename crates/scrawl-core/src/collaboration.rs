//! Multi-user collaboration (not yet implemented).
//!
//! The types here pin down the intended surface so hosts can compile
//! against it; every entry point reports `Unsupported`.

use crate::shapes::{Shape, ShapeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollabError {
    #[error("collaboration is not supported in this build")]
    Unsupported,
}

/// Messages a live session would exchange once implemented.
#[derive(Debug, Clone, PartialEq)]
pub enum CollabEvent {
    PeerJoined { peer: String },
    PeerLeft { peer: String },
    ShapeAdded { shape: Shape },
    ShapeRemoved { id: ShapeId },
    Cleared,
}

/// Placeholder for a shared editing session.
#[derive(Debug, Default)]
pub struct LiveSession {
    _private: (),
}

impl LiveSession {
    pub fn connect(_room: &str) -> Result<Self, CollabError> {
        Err(CollabError::Unsupported)
    }
}
