use crate::error::WorkflowError;
use crate::label_index::index::ClassId;
use serde::Deserialize;

/// The two body shapes the service may answer with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PredictionBody {
    Bare(ClassId),
    Tagged { class: ClassId },
}

impl PredictionBody {
    pub fn class_id(&self) -> ClassId {
        match self {
            PredictionBody::Bare(id) => *id,
            PredictionBody::Tagged { class } => *class,
        }
    }
}

pub fn decode_prediction(body: &[u8]) -> Result<ClassId, WorkflowError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| WorkflowError::Protocol(format!("body is not JSON: {}", e)))?;

    let shape = value.to_string();
    serde_json::from_value::<PredictionBody>(value)
        .map(|body| body.class_id())
        .map_err(|_| {
            WorkflowError::Protocol(format!(
                "expected an integer or {{\"class\": integer}}, got {}",
                truncate(&shape, 80)
            ))
        })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
