use crate::error::WorkflowError;
use crate::label_index::index::{parse_entries, FoodEntry};
use crate::label_index::interface::LabelSource;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

pub struct LabelSourceFile {
    path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl LabelSourceFile {
    pub fn new(path: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path,
            logger: logger.with_namespace("labels").with_namespace("file"),
        }
    }
}

impl LabelSource for LabelSourceFile {
    fn load(&self) -> Result<Vec<FoodEntry>, WorkflowError> {
        let _ = self
            .logger
            .info(&format!("Reading {}", self.path.display()));

        let body = std::fs::read(&self.path).map_err(|e| {
            WorkflowError::Load(format!("could not read {}: {}", self.path.display(), e))
        })?;

        parse_entries(&body)
    }
}
