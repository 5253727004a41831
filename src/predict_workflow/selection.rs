use crate::error::WorkflowError;
use crate::prediction_service::interface::ImageUpload;
use crate::preview_store::interface::{PreviewId, PreviewStore};
use std::path::Path;
use std::sync::Arc;

/// The image chosen for the next submission and the preview derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub image: ImageUpload,
    pub preview: PreviewId,
}

/// Reads a picked file, checks that its content is an image and derives a
/// preview for it.
pub fn read_selection(
    path: &Path,
    preview_store: &dyn PreviewStore,
) -> Result<Selection, WorkflowError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = std::fs::read(path).map_err(|e| {
        WorkflowError::Validation(format!("Could not read {}: {}", path.display(), e))
    })?;

    let media_type = image::guess_format(&bytes)
        .map(|format| format.to_mime_type().to_string())
        .map_err(|_| WorkflowError::Validation(format!("{} is not an image", file_name)))?;

    let preview = preview_store.create(&bytes)?;

    Ok(Selection {
        image: ImageUpload {
            file_name,
            media_type,
            bytes: Arc::from(bytes),
        },
        preview,
    })
}
