use crate::error::WorkflowError;
use crate::preview_store::interface::{PreviewId, PreviewStore, Thumbnail};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Hands out handles without decoding anything and tracks which are live.
#[derive(Default)]
pub struct PreviewStoreFake {
    next_id: AtomicU64,
    live: Mutex<HashSet<PreviewId>>,
    released: Mutex<Vec<PreviewId>>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> Vec<PreviewId> {
        let mut live: Vec<PreviewId> = self
            .live
            .lock()
            .map(|live| live.iter().copied().collect())
            .unwrap_or_default();
        live.sort_by_key(|id| id.0);
        live
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }

    pub fn released(&self) -> Vec<PreviewId> {
        self.released
            .lock()
            .map(|released| released.clone())
            .unwrap_or_default()
    }
}

impl PreviewStore for PreviewStoreFake {
    fn create(&self, _bytes: &[u8]) -> Result<PreviewId, WorkflowError> {
        let id = PreviewId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.live
            .lock()
            .map_err(|e| WorkflowError::Validation(e.to_string()))?
            .insert(id);
        Ok(id)
    }

    fn release(&self, id: PreviewId) {
        if let Ok(mut live) = self.live.lock() {
            live.remove(&id);
        }
        if let Ok(mut released) = self.released.lock() {
            released.push(id);
        }
    }

    fn thumbnail(&self, _id: PreviewId) -> Option<Thumbnail> {
        None
    }
}
