use image::DynamicImage;

/// One of the three selectable model choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    V1,
    V2,
    Tf,
}

impl ModelVariant {
    #[allow(dead_code)]
    pub const ALL: [ModelVariant; 3] = [ModelVariant::V1, ModelVariant::V2, ModelVariant::Tf];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::V1 => "v1",
            ModelVariant::V2 => "v2",
            ModelVariant::Tf => "tf",
        }
    }

    pub fn parse(input: &str) -> Option<ModelVariant> {
        match input {
            "v1" => Some(ModelVariant::V1),
            "v2" => Some(ModelVariant::V2),
            "tf" => Some(ModelVariant::Tf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// What a model hands back: either a raw score vector positionally aligned
/// with the application's category list, or results the model already
/// ranked and labeled itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Scores(Vec<f32>),
    Ranked(Vec<Classification>),
}

pub trait ImageClassifier {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>>;
}
