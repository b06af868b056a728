use crate::classifier_app::core::{init, transition, Effect, Event};
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_ui::interface::{DeviceUi, UiEvent};
use crate::image_classifier::interface::{ImageClassifier, ModelVariant};
use crate::library::logger::interface::Logger;
use crate::model_fetcher::interface::ModelFetcher;
use image::DynamicImage;
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct ClassifierApp {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_ui: Arc<dyn DeviceUi + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub model_fetcher: Arc<dyn ModelFetcher + Send + Sync>,
    /// Loaded model handles, created once per variant and held for the
    /// application's lifetime.
    pub models: Arc<Mutex<HashMap<ModelVariant, Arc<dyn ImageClassifier + Send + Sync>>>>,
    /// The decoded image currently on display.
    pub image: Arc<Mutex<Option<DynamicImage>>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl ClassifierApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_ui: Arc<dyn DeviceUi + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        model_fetcher: Arc<dyn ModelFetcher + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger,
            device_ui,
            device_display,
            model_fetcher,
            models: Arc::new(Mutex::new(HashMap::new())),
            image: Arc::new(Mutex::new(None)),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let effect_clone = effect.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect_clone));
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;

        let (initial_state, effects) = init();
        let mut current_state = initial_state;

        self.render(&current_state)?;
        self.spawn_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(e) => return Err(Box::new(e)),
            };

            let _ = self
                .logger
                .info(&format!("Processing event: {}", event.to_display_string()));

            if let Event::UiEvent(UiEvent::Quit) = event {
                return Ok(());
            }

            let (new_state, new_effects) = transition(current_state, event);
            current_state = new_state;

            self.render(&current_state)?;
            self.spawn_effects(new_effects);
        }
    }
}
