use crate::error::WorkflowError;
use crate::label_index::index::{parse_entries, FoodEntry};
use crate::label_index::interface::LabelSource;
use crate::library::logger::interface::Logger;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;

pub struct LabelSourceHttp {
    url: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl LabelSourceHttp {
    pub fn new(
        url: &str,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, WorkflowError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WorkflowError::Load(format!("could not create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
            logger: logger.with_namespace("labels").with_namespace("http"),
        })
    }
}

impl LabelSource for LabelSourceHttp {
    fn load(&self) -> Result<Vec<FoodEntry>, WorkflowError> {
        let _ = self.logger.info(&format!("GET {}", self.url));

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| WorkflowError::Load(format!("request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WorkflowError::Load(format!(
                "server responded with {}",
                status
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| WorkflowError::Load(format!("could not read body: {}", e)))?;

        let entries = parse_entries(&body)?;
        let _ = self
            .logger
            .info(&format!("Loaded {} food entries", entries.len()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::http_stub::{closed_url, HttpStub};
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::{Offset, Utc};

    fn source(url: &str) -> LabelSourceHttp {
        LabelSourceHttp::new(
            url,
            Duration::from_secs(5),
            Arc::new(LoggerConsole::new(Utc.fix())),
        )
        .unwrap()
    }

    #[test]
    fn test_loads_table() {
        let stub = HttpStub::respond(
            "200 OK",
            r#"[{"id": 1, "name": {"th": "ผัดไทย", "en": "Pad thai"}}]"#,
        );

        let entries = source(&stub.url("/food_data.json")).load().unwrap();
        let request = stub.request();

        assert!(request.starts_with("GET /food_data.json HTTP/1.1"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].name.th, "ผัดไทย");
    }

    #[test]
    fn test_not_found_is_load_error() {
        let stub = HttpStub::respond("404 Not Found", "[]");

        match source(&stub.url("/food_data.json")).load() {
            Err(WorkflowError::Load(message)) => assert!(message.contains("404")),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_malformed_table_is_load_error() {
        let stub = HttpStub::respond("200 OK", r#"{"id": 1}"#);

        let result = source(&stub.url("/food_data.json")).load();

        assert!(matches!(result, Err(WorkflowError::Load(_))));
    }

    #[test]
    fn test_unreachable_server_is_load_error() {
        let result = source(&closed_url("/food_data.json")).load();

        assert!(matches!(result, Err(WorkflowError::Load(_))));
    }
}
