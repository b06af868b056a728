use crate::image_classifier::interface::{Classification, ImageClassifier, Prediction};
use crate::image_classifier::tract::image::resize_image_to_tensor_normalized;
use image::DynamicImage;
use std::io::Cursor;
use tract_onnx::prelude::*;

const INPUT_SIZE: u32 = 224;
const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];
const TOP_K: usize = 5;

/// General-purpose classifier: MobileNetV2 over the ImageNet label set,
/// returning results it ranked and labeled itself.
pub struct ClassifierMobilenet {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
}

impl ClassifierMobilenet {
    pub fn from_bytes(
        model_bytes: &[u8],
        labels_text: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let labels: Vec<String> = labels_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if labels.is_empty() {
            return Err("empty label list".into());
        }

        let model = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(model_bytes))?
            .with_input_fact(
                0,
                f32::fact([1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize]).into(),
            )?
            // the artifact hardcodes its output shape, let tract infer it
            .with_output_fact(0, InferenceFact::default())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model, labels })
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|v| v / sum).collect()
}

impl ImageClassifier for ClassifierMobilenet {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        let input = resize_image_to_tensor_normalized(
            image,
            INPUT_SIZE,
            INPUT_SIZE,
            IMAGENET_MEAN,
            IMAGENET_STD,
        )?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let logits: Vec<f32> = outputs[0].to_array_view::<f32>()?.iter().copied().collect();
        let probabilities = softmax(&logits);

        let mut ranked: Vec<(usize, f32)> = probabilities.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        ranked.truncate(TOP_K);

        let classifications = ranked
            .into_iter()
            .map(|(index, probability)| Classification {
                label: self
                    .labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("class {}", index)),
                confidence: probability,
            })
            .collect();

        Ok(Prediction::Ranked(classifications))
    }
}
