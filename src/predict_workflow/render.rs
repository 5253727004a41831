use crate::label_index::index::ClassId;
use crate::predict_workflow::core::{Labels, Model, Phase};
use crate::preview_store::interface::PreviewId;

pub const TITLE: &str = "Test Predict Food";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: usize,
    pub preview: PreviewId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionView {
    pub class_id: ClassId,
    pub th: String,
    pub en: String,
}

/// Everything a screen needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub selection: Option<SelectionView>,
    pub busy: bool,
    pub submit_label: String,
    pub labels_status: String,
    pub prediction: Option<PredictionView>,
}

impl Default for View {
    fn default() -> Self {
        view(&Model::default())
    }
}

pub fn view(model: &Model) -> View {
    let selection = model.selection.as_ref().map(|selection| SelectionView {
        file_name: selection.image.file_name.clone(),
        media_type: selection.image.media_type.clone(),
        size_bytes: selection.image.bytes.len(),
        preview: selection.preview,
    });

    let prediction = match &model.phase {
        Phase::Resolved { prediction } => {
            let name = model.labels.lookup(Some(prediction.id));
            Some(PredictionView {
                class_id: prediction.id,
                th: name.th,
                en: name.en,
            })
        }
        _ => None,
    };

    let labels_status = match &model.labels {
        Labels::Loading => "Food names: loading...".to_string(),
        Labels::Ready(index) => format!("Food names: {} entries", index.len()),
        Labels::Unavailable => "Food names: unavailable (reload to retry)".to_string(),
    };

    let busy = model.is_busy();

    View {
        title: TITLE.to_string(),
        selection,
        busy,
        submit_label: if busy { "Predicting..." } else { "Predict" }.to_string(),
        labels_status,
        prediction,
    }
}

/// Plain text rendering shared by the console screen and the logs.
pub fn lines(view: &View) -> Vec<String> {
    let mut lines = vec![view.title.clone()];

    match &view.selection {
        Some(selection) => lines.push(format!(
            "Image: {} ({}, {} bytes)",
            selection.file_name, selection.media_type, selection.size_bytes
        )),
        None => lines.push("Image: drop or pick a photo".to_string()),
    }

    lines.push(format!("[{}]", view.submit_label));
    lines.push(view.labels_status.clone());

    if let Some(prediction) = &view.prediction {
        lines.push("Prediction".to_string());
        lines.push(format!("Class ID: {}", prediction.class_id));
        lines.push(format!("Thai Name: {}", prediction.th));
        lines.push(format!("English Name: {}", prediction.en));
    }

    lines
}
