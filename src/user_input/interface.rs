use std::path::PathBuf;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Files dropped or picked at once. Only the first one is used.
    FilesPicked(Vec<PathBuf>),
    Submit,
    ReloadLabels,
    Quit,
}

pub trait UserInput {
    fn events(&self) -> Receiver<InputEvent>;
}
