use crate::config::{Config, LabelsLocation, UiKind};
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UiArg {
    Console,
    Gui,
}

/// Submit a food photo to a classification server and show its name.
#[derive(Debug, Parser)]
#[command(name = "food-predict", version)]
pub struct Args {
    /// Base URL of the prediction server
    #[arg(long)]
    pub server_url: Option<String>,

    /// URL or file path of the food name table (JSON array)
    #[arg(long)]
    pub labels: Option<String>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Longest edge of the preview thumbnail, in pixels
    #[arg(long)]
    pub preview_size: Option<u32>,

    #[arg(long, value_enum)]
    pub ui: Option<UiArg>,

    /// Use built-in fake services instead of the network
    #[arg(long)]
    pub fake: bool,
}

impl Args {
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(server_url) = self.server_url {
            config.server_url = server_url;
        }
        if let Some(labels) = self.labels {
            config.labels = LabelsLocation::parse(&labels);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(timeout_secs);
        }
        if let Some(preview_size) = self.preview_size {
            config.preview_size = preview_size;
        }
        if let Some(ui) = self.ui {
            config.ui = match ui {
                UiArg::Console => UiKind::Console,
                UiArg::Gui => UiKind::Gui,
            };
        }
        config.fake_services = config.fake_services || self.fake;
        config
    }
}
