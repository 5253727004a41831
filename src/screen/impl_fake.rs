use crate::error::Notice;
use crate::predict_workflow::render::View;
use crate::screen::interface::Screen;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records everything it is asked to show. Clones share the same record.
#[derive(Clone, Default)]
pub struct ScreenFake {
    views: Arc<Mutex<Vec<View>>>,
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl ScreenFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> Option<View> {
        self.views.lock().ok()?.last().cloned()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Screen for ScreenFake {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views
            .lock()
            .map_err(|e| e.to_string())?
            .push(view.clone());
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.notices
            .lock()
            .map_err(|e| e.to_string())?
            .push(notice.clone());
        Ok(())
    }
}
