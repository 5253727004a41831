use chrono::{Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Where the food name table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelsLocation {
    Url(String),
    File(PathBuf),
}

impl LabelsLocation {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            LabelsLocation::Url(raw.to_string())
        } else {
            LabelsLocation::File(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub labels: LabelsLocation,
    pub request_timeout: Duration,
    pub preview_size: u32,
    pub logger_timezone: chrono::FixedOffset,
    pub ui: UiKind,
    pub fake_services: bool,
}

impl Config {
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.server_url.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            labels: LabelsLocation::Url("http://127.0.0.1:3000/food_data.json".to_string()),
            request_timeout: Duration::from_secs(30),
            preview_size: 256,
            logger_timezone: indochina_time(),
            ui: UiKind::Console,
            fake_services: false,
        }
    }
}

fn indochina_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix())
}
