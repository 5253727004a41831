use crate::error::WorkflowError;
use crate::label_index::index::{FoodEntry, FoodName};
use crate::label_index::interface::LabelSource;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct LabelSourceFake {
    entries: Vec<FoodEntry>,
    failure: Option<String>,
    delay: Duration,
    loads: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl LabelSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_entries(logger, default_entries())
    }

    pub fn with_entries(logger: Arc<dyn Logger + Send + Sync>, entries: Vec<FoodEntry>) -> Self {
        Self {
            entries,
            failure: None,
            delay: Duration::ZERO,
            loads: AtomicUsize::new(0),
            logger: logger.with_namespace("labels").with_namespace("fake"),
        }
    }

    #[allow(dead_code)]
    pub fn failing(mut self, cause: &str) -> Self {
        self.failure = Some(cause.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[allow(dead_code)]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl LabelSource for LabelSourceFake {
    fn load(&self) -> Result<Vec<FoodEntry>, WorkflowError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info("Loading food entries...");
        std::thread::sleep(self.delay);

        match &self.failure {
            Some(cause) => Err(WorkflowError::Load(cause.clone())),
            None => Ok(self.entries.clone()),
        }
    }
}

pub fn default_entries() -> Vec<FoodEntry> {
    [
        ("ข้าวผัด", "Fried rice"),
        ("ผัดไทย", "Pad thai"),
        ("ส้มตำ", "Papaya salad"),
        ("ต้มยำกุ้ง", "Tom yum goong"),
        ("แกงเขียวหวาน", "Green curry"),
        ("ข้าวมันไก่", "Chicken rice"),
        ("ผัดกะเพรา", "Basil stir-fry"),
        ("ข้าวเหนียวมะม่วง", "Mango sticky rice"),
    ]
    .iter()
    .enumerate()
    .map(|(id, (th, en))| FoodEntry {
        id: id as i64,
        name: FoodName {
            th: th.to_string(),
            en: en.to_string(),
        },
    })
    .collect()
}
