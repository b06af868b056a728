use crate::image_classifier::interface::{Classification, ImageClassifier, Prediction};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

#[allow(dead_code)]
pub struct ClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

#[allow(dead_code)]
impl ClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ClassifierFake {
    fn classify(
        &self,
        _image: &DynamicImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image with fake classifier...")?;

        let animals = [
            "butterfly", "cat", "chicken", "cow", "dog", "elephant", "horse", "sheep", "spider",
            "squirrel",
        ];

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, animals.len())?;

        let confidence_dist = Uniform::new(0.0f32, 1.0)?;

        let classification = Classification {
            label: animals[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };

        Ok(Prediction::Ranked(vec![classification]))
    }
}
