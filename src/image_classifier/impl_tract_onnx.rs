use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use image::DynamicImage;
use std::io::Cursor;
use tract_onnx::prelude::*;

/// Custom-format classifier: an ONNX artifact interpreted by tract, emitting
/// a raw score vector aligned with the application's category list.
pub struct ClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ClassifierTractOnnx {
    pub fn from_bytes(
        config: ModelConfig,
        bytes: &[u8],
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(bytes))?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model, config })
    }
}

impl ImageClassifier for ClassifierTractOnnx {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        let input = resize_image_to_tensor(
            image,
            self.config.input_shape.1, // width
            self.config.input_shape.0, // height
        )?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let scores: Vec<f32> = outputs[0].to_array_view::<f32>()?.iter().copied().collect();

        Ok(Prediction::Scores(scores))
    }
}
