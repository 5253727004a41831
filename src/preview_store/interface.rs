use crate::error::WorkflowError;

/// Handle to a preview derived from a selected image. Whoever holds the
/// selection owns the handle and must release it when the selection goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub trait PreviewStore {
    fn create(&self, bytes: &[u8]) -> Result<PreviewId, WorkflowError>;
    fn release(&self, id: PreviewId);
    fn thumbnail(&self, id: PreviewId) -> Option<Thumbnail>;
}
