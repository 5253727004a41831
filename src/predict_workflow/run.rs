use super::{core::Effect, main::PredictWorkflow};
use crate::predict_workflow::core::{init, transition, Model, Msg};
use crate::predict_workflow::render::view;
use crate::user_input::interface::InputEvent;
use std::error::Error;

impl PredictWorkflow {
    /// Processes messages until the user quits and returns the final model.
    pub fn run(&self) -> Result<Model, Box<dyn Error + Send + Sync>> {
        let _ = self.logger.info(&format!(
            "Predicting with {} using food names from {:?}",
            self.config.predict_url(),
            self.config.labels
        ));

        let (mut current_model, effects) = init();
        self.render(&current_model)?;
        self.execute_effects(effects);

        let receiver = self.msg_receiver.lock().map_err(|e| e.to_string())?;

        loop {
            let msg = receiver.recv()?;

            if matches!(msg, Msg::Input(InputEvent::Quit)) {
                let _ = self.logger.info("Quit requested");
                return Ok(current_model);
            }

            let _ = self
                .logger
                .info(&format!("msg: {}", msg.to_display_string()));

            let (new_model, effects) = transition(current_model, msg);

            let _ = self.logger.info(&format!(
                "phase: {:?}, effects: {:?}",
                new_model.phase, effects
            ));

            current_model = new_model;

            self.execute_effects(effects);

            self.render(&current_model)?;
        }
    }

    fn render(&self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let view = view(model);
        self.screen.lock().map_err(|e| e.to_string())?.render(&view)
    }

    /// Preview releases run inline so the old preview is gone before the
    /// next frame is drawn. Log lines also run inline. Everything else gets
    /// its own thread.
    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            if matches!(effect, Effect::ReleasePreview { .. } | Effect::Log(_)) {
                self.execute_effect(effect);
                continue;
            }
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
