use crate::error::WorkflowError;
use crate::label_index::index::ClassId;
use std::fmt;
use std::sync::Arc;

/// The image as it is sent to the service: raw bytes plus declared media type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

pub trait PredictionService {
    fn predict(&self, image: &ImageUpload) -> Result<ClassId, WorkflowError>;
}
