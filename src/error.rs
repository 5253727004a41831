use thiserror::Error;

/// Every failure the prediction workflow can surface to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The user has to act first (no image, unreadable file, not an image).
    #[error("{0}")]
    Validation(String),

    /// The food name table could not be fetched or parsed.
    #[error("Failed to load food data: {0}")]
    Load(String),

    /// The prediction service was unreachable or answered with a non-200 status.
    #[error("Failed to fetch prediction: {0}")]
    Transport(String),

    /// The prediction service answered with a body of an unexpected shape.
    #[error("Unexpected response format: {0}")]
    Protocol(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A single user-visible alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl WorkflowError {
    pub fn notice(&self) -> Notice {
        let (level, title) = match self {
            WorkflowError::Validation(_) => (NoticeLevel::Warning, "Oops..."),
            WorkflowError::Load(_) => (NoticeLevel::Error, "Food names unavailable"),
            WorkflowError::Transport(_) => (NoticeLevel::Error, "Prediction failed"),
            WorkflowError::Protocol(_) => (NoticeLevel::Error, "Unexpected response"),
        };

        Notice {
            level,
            title: title.to_string(),
            message: self.to_string(),
        }
    }
}
