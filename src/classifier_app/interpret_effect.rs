use crate::classifier_app::core::{Effect, Event};
use crate::classifier_app::main::ClassifierApp;
use crate::image_classifier::impl_mobilenet::ClassifierMobilenet;
use crate::image_classifier::impl_tract_onnx::ClassifierTractOnnx;
use crate::image_classifier::interface::{ImageClassifier, ModelVariant, Prediction};
use std::path::PathBuf;
use std::sync::Arc;

impl ClassifierApp {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeUi => {
                let events = self.device_ui.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Event::UiEvent(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::LoadModel(variant) => {
                let loaded = self.load_model(variant);
                let _ = self.event_sender.send(Event::ModelLoadDone(variant, loaded));
            }
            Effect::LoadImage(path) => {
                let loaded = self.load_image(path);
                let _ = self.event_sender.send(Event::ImageLoadDone(loaded));
            }
            Effect::Classify(variant) => {
                let classified = self.classify(variant);
                let _ = self.event_sender.send(Event::ClassifyDone(classified));
            }
        }
    }

    fn load_model(
        &self,
        variant: ModelVariant,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let classifier: Arc<dyn ImageClassifier + Send + Sync> = match variant {
            ModelVariant::V1 | ModelVariant::V2 => {
                let model_config = match variant {
                    ModelVariant::V1 => self.config.v1_model.clone(),
                    _ => self.config.v2_model.clone(),
                };
                let bytes = self.model_fetcher.fetch(&model_config.model_url)?;
                Arc::new(ClassifierTractOnnx::from_bytes(model_config, &bytes)?)
            }
            ModelVariant::Tf => {
                let model_bytes = self.model_fetcher.fetch(&self.config.general_model_url)?;
                let labels_bytes = self.model_fetcher.fetch(&self.config.general_labels_url)?;
                let labels_text = String::from_utf8(labels_bytes)?;
                Arc::new(ClassifierMobilenet::from_bytes(&model_bytes, &labels_text)?)
            }
        };

        self.models.lock().unwrap().insert(variant, classifier);

        Ok(())
    }

    fn load_image(
        &self,
        path: PathBuf,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let image = image::open(&path)?;
        *self.image.lock().unwrap() = Some(image);
        Ok(path)
    }

    fn classify(
        &self,
        variant: ModelVariant,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        let classifier = self
            .models
            .lock()
            .unwrap()
            .get(&variant)
            .cloned()
            .ok_or("model not loaded")?;

        let image = self
            .image
            .lock()
            .unwrap()
            .clone()
            .ok_or("no image loaded")?;

        classifier.classify(&image)
    }
}
