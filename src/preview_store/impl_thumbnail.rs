use crate::error::WorkflowError;
use crate::library::logger::interface::Logger;
use crate::preview_store::interface::{PreviewId, PreviewStore, Thumbnail};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Decodes each selection once and keeps a downscaled RGBA copy until the
/// handle is released.
pub struct PreviewStoreThumbnail {
    max_edge: u32,
    next_id: AtomicU64,
    thumbnails: Mutex<HashMap<PreviewId, Thumbnail>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PreviewStoreThumbnail {
    pub fn new(max_edge: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            max_edge: max_edge.max(1),
            next_id: AtomicU64::new(1),
            thumbnails: Mutex::new(HashMap::new()),
            logger: logger.with_namespace("preview"),
        }
    }

    #[allow(dead_code)]
    pub fn live_count(&self) -> usize {
        self.thumbnails.lock().map(|t| t.len()).unwrap_or(0)
    }
}

impl PreviewStore for PreviewStoreThumbnail {
    fn create(&self, bytes: &[u8]) -> Result<PreviewId, WorkflowError> {
        let image = image::load_from_memory(bytes).map_err(|e| {
            WorkflowError::Validation(format!("The file could not be decoded as an image: {}", e))
        })?;
        let rgba = image.thumbnail(self.max_edge, self.max_edge).to_rgba8();
        let thumbnail = Thumbnail {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        };

        let id = PreviewId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.thumbnails
            .lock()
            .map_err(|e| WorkflowError::Validation(e.to_string()))?
            .insert(id, thumbnail);
        let _ = self.logger.info(&format!("Created preview {:?}", id));
        Ok(id)
    }

    fn release(&self, id: PreviewId) {
        let removed = match self.thumbnails.lock() {
            Ok(mut thumbnails) => thumbnails.remove(&id).is_some(),
            Err(_) => false,
        };
        if removed {
            let _ = self.logger.info(&format!("Released preview {:?}", id));
        } else {
            let _ = self
                .logger
                .error(&format!("Release of unknown preview {:?}", id));
        }
    }

    fn thumbnail(&self, id: PreviewId) -> Option<Thumbnail> {
        self.thumbnails.lock().ok()?.get(&id).cloned()
    }
}
