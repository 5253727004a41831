use crate::config::Config;
use crate::label_index::interface::LabelSource;
use crate::library::logger::interface::Logger;
use crate::prediction_service::interface::PredictionService;
use crate::predict_workflow::core::Msg;
use crate::preview_store::interface::PreviewStore;
use crate::screen::interface::Screen;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// One prediction session: the collaborators plus the channel every effect
/// reports back on. Clones share the channel; the model itself lives only
/// inside [`PredictWorkflow::run`].
#[derive(Clone)]
pub struct PredictWorkflow {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub label_source: Arc<dyn LabelSource + Send + Sync>,
    pub prediction_service: Arc<dyn PredictionService + Send + Sync>,
    pub preview_store: Arc<dyn PreviewStore + Send + Sync>,
    pub screen: Arc<Mutex<dyn Screen + Send + Sync>>,
    pub user_input: Arc<dyn UserInput + Send + Sync>,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl PredictWorkflow {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        label_source: Arc<dyn LabelSource + Send + Sync>,
        prediction_service: Arc<dyn PredictionService + Send + Sync>,
        preview_store: Arc<dyn PreviewStore + Send + Sync>,
        screen: Arc<Mutex<dyn Screen + Send + Sync>>,
        user_input: Arc<dyn UserInput + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("workflow"),
            label_source,
            prediction_service,
            preview_store,
            screen,
            user_input,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    pub fn send(&self, msg: Msg) {
        if self.msg_sender.send(msg).is_err() {
            let _ = self.logger.error("Workflow loop is gone, dropping message");
        }
    }
}
