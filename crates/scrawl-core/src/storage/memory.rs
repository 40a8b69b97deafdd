//! In-memory snapshot store.

use super::{decode_snapshot, encode_snapshot, BoxFuture, SnapshotStore, StorageError, StorageResult};
use crate::shapes::Shape;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral use.
#[derive(Default)]
pub struct MemorySnapshotStore {
    blob: RwLock<Option<String>>,
}

impl MemorySnapshotStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw blob, valid or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            blob: RwLock::new(Some(raw.to_string())),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<()>> {
        let encoded = encode_snapshot(shapes);
        Box::pin(async move {
            let mut blob = self
                .blob
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            *blob = Some(encoded?);
            Ok(())
        })
    }

    fn load(&self) -> BoxFuture<'_, Vec<Shape>> {
        Box::pin(async move {
            let blob = match self.blob.read() {
                Ok(blob) => blob,
                Err(e) => {
                    log::warn!("snapshot lock poisoned: {}", e);
                    return Vec::new();
                }
            };
            blob.as_deref().map(decode_snapshot).unwrap_or_default()
        })
    }

    fn clear(&self) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let mut blob = self
                .blob
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            *blob = None;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line};
    use kurbo::Point;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        // Simple blocking executor for tests
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = MemorySnapshotStore::new();
        let shapes = vec![Shape::Circle(Circle::new(Point::new(5.0, 5.0), 3.0))];

        block_on(store.save(&shapes)).unwrap();
        let loaded = block_on(store.load());

        assert_eq!(loaded, shapes);
    }

    #[test]
    fn test_load_empty_store() {
        let store = MemorySnapshotStore::new();
        assert!(block_on(store.load()).is_empty());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let store = MemorySnapshotStore::with_raw("{not valid json");
        assert!(block_on(store.load()).is_empty());
    }

    #[test]
    fn test_previews_are_not_persisted() {
        let store = MemorySnapshotStore::new();
        let shapes = vec![
            Shape::Circle(Circle::new(Point::ZERO, 1.0)),
            Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0))).into_preview(),
        ];

        block_on(store.save(&shapes)).unwrap();
        let loaded = block_on(store.load());

        assert_eq!(loaded.len(), 1);
        assert!(matches!(loaded[0], Shape::Circle(_)));
    }

    #[test]
    fn test_clear() {
        let store = MemorySnapshotStore::new();
        let shapes = vec![Shape::Circle(Circle::new(Point::ZERO, 1.0))];

        block_on(store.save(&shapes)).unwrap();
        block_on(store.clear()).unwrap();
        assert!(block_on(store.load()).is_empty());
    }
}
