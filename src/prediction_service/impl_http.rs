use crate::error::WorkflowError;
use crate::label_index::index::ClassId;
use crate::library::logger::interface::Logger;
use crate::prediction_service::interface::{ImageUpload, PredictionService};
use crate::prediction_service::response::decode_prediction;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;

/// Posts the image as multipart field `file` to `{server}/predict`.
pub struct PredictionServiceHttp {
    predict_url: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionServiceHttp {
    pub fn new(
        predict_url: &str,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, WorkflowError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WorkflowError::Transport(format!("could not create HTTP client: {}", e)))?;

        Ok(Self {
            predict_url: predict_url.to_string(),
            client,
            logger: logger.with_namespace("prediction").with_namespace("http"),
        })
    }
}

impl PredictionService for PredictionServiceHttp {
    fn predict(&self, image: &ImageUpload) -> Result<ClassId, WorkflowError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.predict_url,
            image.media_type,
            image.bytes.len()
        ));

        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.media_type)
            .map_err(|e| WorkflowError::Transport(format!("invalid media type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .map_err(|e| WorkflowError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WorkflowError::Transport(format!(
                "server responded with {}",
                status
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| WorkflowError::Transport(format!("could not read body: {}", e)))?;

        let class_id = decode_prediction(&body)?;
        let _ = self.logger.info(&format!("Predicted class {}", class_id));
        Ok(class_id)
    }
}
