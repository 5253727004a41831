use crate::config::Config;
use crate::label_index::impl_fake::LabelSourceFake;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::prediction_service::impl_fake::{FakeReply, PredictionServiceFake};
use crate::predict_workflow::core::Model;
use crate::predict_workflow::main::PredictWorkflow;
use crate::predict_workflow::render::View;
use crate::preview_store::impl_fake::PreviewStoreFake;
use crate::screen::impl_fake::ScreenFake;
use crate::user_input::impl_fake::UserInputFake;
use crate::user_input::interface::InputEvent;
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn logger() -> Arc<dyn Logger + Send + Sync> {
    Arc::new(LoggerConsole::new(Config::default().logger_timezone))
}

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub label_source: Arc<LabelSourceFake>,
    pub prediction_service: Arc<PredictionServiceFake>,
    pub preview_store: Arc<PreviewStoreFake>,
    pub screen: ScreenFake,
    pub user_input: Arc<UserInputFake>,
    pub workflow: PredictWorkflow,
    dir: TempDir,
}

impl Fixture {
    /// Default table and a service that always predicts class 5.
    pub fn new() -> Self {
        Self::with_fakes(
            LabelSourceFake::new(logger()),
            PredictionServiceFake::new(logger(), FakeReply::Fixed(Ok(5))),
        )
    }

    pub fn with_fakes(
        label_source: LabelSourceFake,
        prediction_service: PredictionServiceFake,
    ) -> Self {
        let config = Config::default();
        let label_source = Arc::new(label_source);
        let prediction_service = Arc::new(prediction_service);
        let preview_store = Arc::new(PreviewStoreFake::new());
        let screen = ScreenFake::new();
        let user_input = Arc::new(UserInputFake::new());

        let workflow = PredictWorkflow::new(
            config.clone(),
            logger(),
            label_source.clone(),
            prediction_service.clone(),
            preview_store.clone(),
            Arc::new(Mutex::new(screen.clone())),
            user_input.clone(),
        );

        Self {
            config,
            label_source,
            prediction_service,
            preview_store,
            screen,
            user_input,
            workflow,
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn start(&self) -> JoinHandle<Result<Model, Box<dyn Error + Send + Sync>>> {
        let workflow = self.workflow.clone();
        std::thread::spawn(move || workflow.run())
    }

    pub fn stop(&self, handle: JoinHandle<Result<Model, Box<dyn Error + Send + Sync>>>) -> Model {
        self.send(InputEvent::Quit);
        handle.join().unwrap().unwrap()
    }

    pub fn send(&self, event: InputEvent) {
        self.user_input.send(event);
    }

    /// Writes a small PNG into the fixture's temp dir.
    pub fn image(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        image::RgbImage::new(8, 8).save(&path).unwrap();
        path
    }

    pub fn pick(&self, names: &[&str]) {
        let paths = names.iter().map(|name| self.image(name)).collect();
        self.send(InputEvent::FilesPicked(paths));
    }

    pub fn view(&self) -> View {
        self.screen.last_view().unwrap_or_default()
    }

    pub fn wait_until(&self, what: &str, condition: impl Fn(&Fixture) -> bool) {
        let start = Instant::now();
        while !condition(self) {
            if start.elapsed() > WAIT_TIMEOUT {
                panic!("timed out waiting for {}; last view: {:?}", what, self.view());
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    pub fn wait_for_labels(&self) {
        self.wait_until("labels to load", |f| {
            f.view().labels_status.ends_with("entries")
        });
    }

    pub fn wait_for_selection(&self, file_name: &str) {
        self.wait_until(file_name, |f| {
            f.view()
                .selection
                .is_some_and(|selection| selection.file_name == file_name)
        });
    }
}
