use clap::Parser;
use cli::Args;
use config::{Config, LabelsLocation, UiKind};
use label_index::{
    impl_fake::LabelSourceFake, impl_file::LabelSourceFile, impl_http::LabelSourceHttp,
    interface::LabelSource,
};
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use prediction_service::{
    impl_fake::{FakeReply, PredictionServiceFake},
    impl_http::PredictionServiceHttp,
    interface::PredictionService,
};
use predict_workflow::main::PredictWorkflow;
use preview_store::{impl_thumbnail::PreviewStoreThumbnail, interface::PreviewStore};
use screen::{impl_console::ScreenConsole, impl_gui::ScreenGui};
use std::sync::{Arc, Mutex};
use user_input::impl_console::UserInputConsole;

mod cli;
mod config;
mod error;
mod label_index;
mod library;
mod prediction_service;
mod predict_workflow;
mod preview_store;
mod screen;
mod user_input;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Args::parse().apply(Config::default());

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let label_source: Arc<dyn LabelSource + Send + Sync> = if config.fake_services {
        Arc::new(LabelSourceFake::new(logger.clone()))
    } else {
        match &config.labels {
            LabelsLocation::Url(url) => Arc::new(LabelSourceHttp::new(
                url,
                config.request_timeout,
                logger.clone(),
            )?),
            LabelsLocation::File(path) => {
                Arc::new(LabelSourceFile::new(path.clone(), logger.clone()))
            }
        }
    };

    let prediction_service: Arc<dyn PredictionService + Send + Sync> = if config.fake_services {
        Arc::new(
            PredictionServiceFake::new(logger.clone(), FakeReply::Random { class_count: 8 })
                .delayed(std::time::Duration::from_millis(800)),
        )
    } else {
        Arc::new(PredictionServiceHttp::new(
            &config.predict_url(),
            config.request_timeout,
            logger.clone(),
        )?)
    };

    let preview_store: Arc<dyn PreviewStore + Send + Sync> = Arc::new(
        PreviewStoreThumbnail::new(config.preview_size, logger.clone()),
    );

    match config.ui {
        UiKind::Console => {
            let workflow = PredictWorkflow::new(
                config.clone(),
                logger.clone(),
                label_source,
                prediction_service,
                preview_store,
                Arc::new(Mutex::new(ScreenConsole::new())),
                Arc::new(UserInputConsole::new(logger.clone())),
            );
            workflow.run()?;
        }
        UiKind::Gui => {
            let gui = ScreenGui::new(preview_store.clone());
            let workflow = PredictWorkflow::new(
                config.clone(),
                logger.clone(),
                label_source,
                prediction_service,
                preview_store,
                Arc::new(Mutex::new(gui.clone())),
                Arc::new(gui.clone()),
            );
            let workflow_thread = std::thread::spawn(move || workflow.run());

            gui.run_window()?;

            match workflow_thread.join() {
                Ok(result) => {
                    result?;
                }
                Err(_) => return Err("workflow thread panicked".into()),
            }
        }
    }

    Ok(())
}
