use crate::error::WorkflowError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Integer the inference service returns for a predicted category.
pub type ClassId = i64;

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodName {
    pub th: String,
    pub en: String,
}

impl FoodName {
    pub fn not_found() -> Self {
        Self {
            th: NOT_FOUND.to_string(),
            en: NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: ClassId,
    pub name: FoodName,
}

/// In-memory table from class id to bilingual name.
///
/// Entries keep their table order. When an id appears more than once the
/// first entry wins; later duplicates are kept but never returned by
/// [`LabelIndex::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelIndex {
    entries: Vec<FoodEntry>,
    positions: HashMap<ClassId, usize>,
}

impl LabelIndex {
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            positions.entry(entry.id).or_insert(position);
        }
        Self { entries, positions }
    }

    /// Total: absent ids and unknown ids resolve to [`FoodName::not_found`].
    pub fn lookup(&self, id: Option<ClassId>) -> FoodName {
        id.and_then(|id| self.positions.get(&id))
            .and_then(|&position| self.entries.get(position))
            .map(|entry| entry.name.clone())
            .unwrap_or_else(FoodName::not_found)
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn duplicate_ids(&self) -> Vec<ClassId> {
        let mut seen = HashMap::new();
        let mut duplicates = vec![];
        for entry in &self.entries {
            let count = seen.entry(entry.id).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                duplicates.push(entry.id);
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn parse_entries(body: &[u8]) -> Result<Vec<FoodEntry>, WorkflowError> {
    serde_json::from_slice(body)
        .map_err(|e| WorkflowError::Load(format!("invalid food data: {}", e)))
}
