//! Snapshot persistence for the shape document.
//!
//! The whole document is stored as one JSON blob under a single key,
//! written after every change and read back on startup.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemorySnapshotStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSnapshotStore;

use crate::shapes::Shape;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Key the snapshot blob is stored under.
pub const SNAPSHOT_KEY: &str = "canvas:shapes";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Serialize shapes for storage, leaving ephemeral previews out.
fn encode_snapshot(shapes: &[Shape]) -> StorageResult<String> {
    let committed: Vec<&Shape> = shapes.iter().filter(|s| !s.is_preview()).collect();
    serde_json::to_string(&committed).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a stored snapshot. Unreadable data degrades to an empty
/// document rather than failing startup.
fn decode_snapshot(raw: &str) -> Vec<Shape> {
    match serde_json::from_str(raw) {
        Ok(shapes) => shapes,
        Err(e) => {
            log::warn!("discarding unreadable snapshot: {}", e);
            Vec::new()
        }
    }
}

/// Trait for snapshot storage backends.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait SnapshotStore: Send + Sync {
    /// Persist the document. Preview shapes are not stored.
    fn save(&self, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the stored document. A missing or unreadable snapshot
    /// yields an empty document.
    fn load(&self) -> BoxFuture<'_, Vec<Shape>>;

    /// Remove the stored snapshot.
    fn clear(&self) -> BoxFuture<'_, StorageResult<()>>;
}

/// Trait for snapshot storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait SnapshotStore {
    /// Persist the document. Preview shapes are not stored.
    fn save(&self, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the stored document. A missing or unreadable snapshot
    /// yields an empty document.
    fn load(&self) -> BoxFuture<'_, Vec<Shape>>;

    /// Remove the stored snapshot.
    fn clear(&self) -> BoxFuture<'_, StorageResult<()>>;
}
