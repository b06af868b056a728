use crate::device_ui::interface::UiEvent;
use crate::image_classifier::interface::{ModelVariant, Prediction};
use std::path::PathBuf;

/// The categories the two custom models score, in artifact order.
pub const CATEGORIES: [&str; 10] = [
    "butterfly",
    "cat",
    "chicken",
    "cow",
    "dog",
    "elephant",
    "horse",
    "sheep",
    "spider",
    "squirrel",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelStatuses {
    pub v1: ModelStatus,
    pub v2: ModelStatus,
    pub tf: ModelStatus,
}

impl ModelStatuses {
    pub fn get(&self, variant: ModelVariant) -> ModelStatus {
        match variant {
            ModelVariant::V1 => self.v1,
            ModelVariant::V2 => self.v2,
            ModelVariant::Tf => self.tf,
        }
    }

    pub fn set(&mut self, variant: ModelVariant, status: ModelStatus) {
        match variant {
            ModelVariant::V1 => self.v1 = status,
            ModelVariant::V2 => self.v2 = status,
            ModelVariant::Tf => self.tf = status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub models: ModelStatuses,
    pub selected: ModelVariant,
    pub image: Option<PathBuf>,
    pub prediction: Option<Prediction>,
}

#[derive(Debug)]
pub enum Event {
    UiEvent(UiEvent),
    ModelLoadDone(
        ModelVariant,
        Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ),
    ImageLoadDone(Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone(Result<Prediction, Box<dyn std::error::Error + Send + Sync>>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ClassifyDone(Ok(_)) => "ClassifyDone(Ok(..))".to_string(),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeUi,
    LoadModel(ModelVariant),
    LoadImage(PathBuf),
    Classify(ModelVariant),
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State {
            models: ModelStatuses::default(),
            selected: ModelVariant::V1,
            image: None,
            prediction: None,
        },
        vec![
            Effect::SubscribeUi,
            Effect::LoadModel(ModelVariant::V1),
            Effect::LoadModel(ModelVariant::V2),
            Effect::LoadModel(ModelVariant::Tf),
        ],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::UiEvent(UiEvent::ImageChosen(path)) => (
            State {
                prediction: None,
                ..state
            },
            vec![Effect::LoadImage(path)],
        ),

        Event::UiEvent(UiEvent::VariantChosen(variant)) => (
            State {
                selected: variant,
                prediction: None,
                ..state
            },
            vec![],
        ),

        Event::UiEvent(UiEvent::PredictPressed) => {
            if state.image.is_none() {
                return (state, vec![]);
            }
            if state.models.get(state.selected) != ModelStatus::Loaded {
                return (state, vec![]);
            }

            let selected = state.selected;
            (state, vec![Effect::Classify(selected)])
        }

        Event::UiEvent(UiEvent::Quit) => (state, vec![]),

        Event::ModelLoadDone(variant, result) => {
            let mut models = state.models;
            let status = match result {
                Ok(()) => ModelStatus::Loaded,
                Err(_) => ModelStatus::Failed,
            };
            models.set(variant, status);
            (State { models, ..state }, vec![])
        }

        Event::ImageLoadDone(Ok(path)) => (
            State {
                image: Some(path),
                prediction: None,
                ..state
            },
            vec![],
        ),

        // Decode failures surface in the event log only
        Event::ImageLoadDone(Err(_)) => (state, vec![]),

        Event::ClassifyDone(Ok(prediction)) => (
            State {
                prediction: Some(prediction),
                ..state
            },
            vec![],
        ),

        Event::ClassifyDone(Err(_)) => (state, vec![]),
    }
}

/// Index of the winning category in a score vector. The running maximum
/// starts at 0 and only a strictly greater score displaces it, so ties keep
/// the first occurrence and an all-non-positive vector reports index 0.
pub fn calculate_prediction(scores: &[f32]) -> usize {
    let mut biggest_prediction = 0.0f32;
    let mut category_index = 0;

    for (index, score) in scores.iter().enumerate() {
        if *score > biggest_prediction {
            biggest_prediction = *score;
            category_index = index;
        }
    }

    category_index
}
