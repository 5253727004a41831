use crate::error::WorkflowError;
use crate::label_index::index::FoodEntry;

/// Fetches the food name table. Called once per session and again only on
/// an explicit reload.
pub trait LabelSource {
    fn load(&self) -> Result<Vec<FoodEntry>, WorkflowError>;
}
