use crate::error::WorkflowError;
use crate::label_index::index::ClassId;
use crate::library::logger::interface::Logger;
use crate::prediction_service::interface::{ImageUpload, PredictionService};
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum FakeReply {
    Random { class_count: ClassId },
    #[allow(dead_code)]
    Fixed(Result<ClassId, WorkflowError>),
}

pub struct PredictionServiceFake {
    reply: Mutex<FakeReply>,
    delay: Duration,
    calls: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionServiceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, reply: FakeReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("prediction").with_namespace("fake"),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[allow(dead_code)]
    pub fn set_reply(&self, reply: FakeReply) {
        if let Ok(mut current) = self.reply.lock() {
            *current = reply;
        }
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictionService for PredictionServiceFake {
    fn predict(&self, image: &ImageUpload) -> Result<ClassId, WorkflowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake service...", image.file_name));

        let reply = self
            .reply
            .lock()
            .map_err(|e| WorkflowError::Transport(e.to_string()))?
            .clone();

        std::thread::sleep(self.delay);

        match reply {
            FakeReply::Random { class_count } => {
                let index_dist = Uniform::new(0, class_count.max(1))
                    .map_err(|e| WorkflowError::Transport(e.to_string()))?;
                Ok(index_dist.sample(&mut rand::rng()))
            }
            FakeReply::Fixed(result) => result,
        }
    }
}
