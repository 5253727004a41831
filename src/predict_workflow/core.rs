use crate::error::{Notice, WorkflowError};
use crate::label_index::index::{ClassId, FoodName, LabelIndex};
use crate::prediction_service::interface::ImageUpload;
use crate::predict_workflow::selection::Selection;
use crate::preview_store::interface::PreviewId;
use crate::user_input::interface::InputEvent;
use std::path::PathBuf;

pub const MISSING_IMAGE: &str = "Please add an image first";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub id: ClassId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Selected,
    Submitting {
        submission: u64,
    },
    Resolved {
        prediction: PredictionResult,
    },
    Failed {
        error: WorkflowError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Labels {
    #[default]
    Loading,
    Ready(LabelIndex),
    Unavailable,
}

impl Labels {
    /// Whatever state the table is in, this never fails.
    pub fn lookup(&self, id: Option<ClassId>) -> FoodName {
        match self {
            Labels::Ready(index) => index.lookup(id),
            Labels::Loading | Labels::Unavailable => FoodName::not_found(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub phase: Phase,
    pub selection: Option<Selection>,
    pub labels: Labels,
    pub last_pick: u64,
    pub last_submission: u64,
}

impl Model {
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }
}

#[derive(Debug)]
pub enum Msg {
    Input(InputEvent),
    SelectionReadDone {
        pick: u64,
        result: Result<Selection, WorkflowError>,
    },
    PredictDone {
        submission: u64,
        result: Result<ClassId, WorkflowError>,
    },
    LabelsLoadDone(Result<LabelIndex, WorkflowError>),
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::LabelsLoadDone(Ok(index)) => {
                format!("LabelsLoadDone(Ok(<{} entries>))", index.len())
            }
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubscribeInput,
    LoadLabels,
    ReadSelection { pick: u64, path: PathBuf },
    ReleasePreview { preview: PreviewId },
    Predict { submission: u64, image: ImageUpload },
    ShowNotice(Notice),
    Log(String),
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![Effect::SubscribeInput, Effect::LoadLabels],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::Input(InputEvent::FilesPicked(paths)) => {
            let Some(path) = paths.into_iter().next() else {
                return (model, vec![]);
            };
            let pick = model.last_pick + 1;
            (
                Model {
                    last_pick: pick,
                    ..model
                },
                vec![Effect::ReadSelection { pick, path }],
            )
        }

        Msg::SelectionReadDone { pick, result } if pick != model.last_pick => match result {
            // A newer pick superseded this one.
            Ok(stale) => (
                model,
                vec![Effect::ReleasePreview {
                    preview: stale.preview,
                }],
            ),
            Err(error) => (
                model,
                vec![Effect::Log(format!(
                    "Dropped failed read of superseded pick {}: {}",
                    pick, error
                ))],
            ),
        },
        Msg::SelectionReadDone {
            result: Ok(selection),
            ..
        } => {
            let mut effects = vec![];
            if let Some(previous) = &model.selection {
                effects.push(Effect::ReleasePreview {
                    preview: previous.preview,
                });
            }
            (
                Model {
                    phase: Phase::Selected,
                    selection: Some(selection),
                    ..model
                },
                effects,
            )
        }
        Msg::SelectionReadDone { result: Err(e), .. } => {
            (model, vec![Effect::ShowNotice(e.notice())])
        }

        Msg::Input(InputEvent::Submit) => {
            if model.is_busy() {
                return (model, vec![]);
            }
            let Some(image) = model.selection.as_ref().map(|s| s.image.clone()) else {
                let error = WorkflowError::Validation(MISSING_IMAGE.to_string());
                return (model, vec![Effect::ShowNotice(error.notice())]);
            };
            let submission = model.last_submission + 1;
            (
                Model {
                    phase: Phase::Submitting { submission },
                    last_submission: submission,
                    ..model
                },
                vec![Effect::Predict { submission, image }],
            )
        }

        Msg::PredictDone { submission, result } => {
            if model.phase != (Phase::Submitting { submission }) {
                return (model, vec![]);
            }
            match result {
                Ok(id) => {
                    let mut effects = vec![];
                    if let Labels::Ready(index) = &model.labels {
                        if !index.contains(id) {
                            effects.push(Effect::Log(format!("Food with ID {} not found", id)));
                        }
                    }
                    (
                        Model {
                            phase: Phase::Resolved {
                                prediction: PredictionResult { id },
                            },
                            ..model
                        },
                        effects,
                    )
                }
                Err(error) => {
                    let notice = error.notice();
                    (
                        Model {
                            phase: Phase::Failed { error },
                            ..model
                        },
                        vec![Effect::ShowNotice(notice)],
                    )
                }
            }
        }

        Msg::Input(InputEvent::ReloadLabels) => match model.labels {
            Labels::Loading => (model, vec![]),
            _ => (
                Model {
                    labels: Labels::Loading,
                    ..model
                },
                vec![Effect::LoadLabels],
            ),
        },
        Msg::LabelsLoadDone(Ok(index)) => (
            Model {
                labels: Labels::Ready(index),
                ..model
            },
            vec![],
        ),
        Msg::LabelsLoadDone(Err(error)) => (
            Model {
                labels: Labels::Unavailable,
                ..model
            },
            vec![Effect::ShowNotice(error.notice())],
        ),

        // Quit is handled by the run loop before it reaches here.
        Msg::Input(InputEvent::Quit) => (model, vec![]),
    }
}
