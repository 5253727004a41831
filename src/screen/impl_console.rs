use crate::error::{Notice, NoticeLevel};
use crate::predict_workflow::render::{lines, View};
use crate::screen::interface::Screen;
use std::error::Error;

pub struct ScreenConsole {
    last_view: Option<View>,
}

impl ScreenConsole {
    pub fn new() -> Self {
        Self { last_view: None }
    }
}

impl Default for ScreenConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScreenConsole {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_view.as_ref() == Some(view) {
            return Ok(());
        }

        let lines = lines(view);
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        println!("┌{}┐", "─".repeat(width + 2));
        for line in &lines {
            let padding = width - line.chars().count();
            println!("│ {}{} │", line, " ".repeat(padding));
        }
        println!("└{}┘", "─".repeat(width + 2));

        self.last_view = Some(view.clone());
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn Error + Send + Sync>> {
        let marker = match notice.level {
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "x",
        };
        println!("[{}] {}: {}", marker, notice.title, notice.message);
        Ok(())
    }
}
