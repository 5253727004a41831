use super::main::PredictWorkflow;
use crate::label_index::index::LabelIndex;
use crate::predict_workflow::core::{Effect, Msg};
use crate::predict_workflow::selection::read_selection;

impl PredictWorkflow {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeInput => {
                let events = self.user_input.events();
                for event in events {
                    self.send(Msg::Input(event));
                }
            }
            Effect::LoadLabels => {
                let loaded = self.label_source.load().map(LabelIndex::new);
                if let Ok(index) = &loaded {
                    let duplicates = index.duplicate_ids();
                    if !duplicates.is_empty() {
                        let _ = self.logger.error(&format!(
                            "Food data has duplicate ids {:?}; the first entry of each is used",
                            duplicates
                        ));
                    }
                }
                self.send(Msg::LabelsLoadDone(loaded));
            }
            Effect::ReadSelection { pick, path } => {
                let result = read_selection(&path, &*self.preview_store);
                self.send(Msg::SelectionReadDone { pick, result });
            }
            Effect::ReleasePreview { preview } => {
                self.preview_store.release(preview);
            }
            Effect::Predict { submission, image } => {
                let result = self.prediction_service.predict(&image);
                self.send(Msg::PredictDone { submission, result });
            }
            Effect::Log(message) => {
                let _ = self.logger.info(&message);
            }
            Effect::ShowNotice(notice) => match self.screen.lock() {
                Ok(mut screen) => {
                    if let Err(e) = screen.notify(&notice) {
                        let _ = self.logger.error(&format!("Could not show notice: {}", e));
                    }
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("Screen unavailable: {}", e));
                }
            },
        }
    }
}
