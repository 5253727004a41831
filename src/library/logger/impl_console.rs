use crate::library::logger::interface::Logger;
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

/// Writes timestamped lines to stderr so they never interleave with the
/// console screen on stdout.
#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn write(
        &self,
        level: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        let mut stderr = std::io::stderr().lock();
        match &self.namespace {
            Some(namespace) => writeln!(
                stderr,
                "[{}] {} {}: {}",
                formatted, level, namespace, message
            )?,
            None => writeln!(stderr, "[{}] {} {}", formatted, level, message)?,
        };
        Ok(())
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write("INFO", message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write("ERROR", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}
