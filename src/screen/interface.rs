use crate::error::Notice;
use crate::predict_workflow::render::View;
use std::error::Error;

/// The user-facing surface of the workflow.
pub trait Screen: Send + Sync {
    /// Draw the current view. Called after every processed message.
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show an alert. Called exactly once per notice.
    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn Error + Send + Sync>>;
}
