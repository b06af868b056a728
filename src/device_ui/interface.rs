use crate::image_classifier::interface::ModelVariant;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ImageChosen(PathBuf),
    VariantChosen(ModelVariant),
    PredictPressed,
    Quit,
}

/// The user input surface: a stream of choices and button presses.
pub trait DeviceUi: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<UiEvent>;
}
