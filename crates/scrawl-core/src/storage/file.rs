//! File-based snapshot store for native platforms.

use super::{
    decode_snapshot, encode_snapshot, BoxFuture, SnapshotStore, StorageError, StorageResult,
    SNAPSHOT_KEY,
};
use crate::shapes::Shape;
use std::fs;
use std::path::PathBuf;

/// File-based snapshot store.
///
/// Stores the document as a single JSON file inside a base directory,
/// named after the snapshot key.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        // Sanitize the key to be safe for filenames.
        let file_name: String = SNAPSHOT_KEY
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        Ok(Self {
            path: base_path.join(format!("{}.json", file_name)),
        })
    }

    /// Create a store in the default location.
    ///
    /// On Unix: `~/.local/share/scrawl/`
    /// On Windows: `%LOCALAPPDATA%\scrawl\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Self::new(base.join("scrawl"))
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<()>> {
        let encoded = encode_snapshot(shapes);
        Box::pin(async move {
            fs::write(&self.path, encoded?).map_err(|e| {
                StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e))
            })
        })
    }

    fn load(&self) -> BoxFuture<'_, Vec<Shape>> {
        Box::pin(async move {
            if !self.path.exists() {
                return Vec::new();
            }
            match fs::read_to_string(&self.path) {
                Ok(raw) => decode_snapshot(&raw),
                Err(e) => {
                    log::warn!("failed to read {}: {}", self.path.display(), e);
                    Vec::new()
                }
            }
        })
    }

    fn clear(&self) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| {
                    StorageError::Io(format!("Failed to delete {}: {}", self.path.display(), e))
                })?;
            }
            Ok(())
        })
    }
}
