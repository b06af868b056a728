use crate::device_ui::interface::{DeviceUi, UiEvent};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Replays a scripted event sequence.
#[allow(dead_code)]
pub struct DeviceUiFake {
    logger: Arc<dyn Logger + Send + Sync>,
    script: Vec<UiEvent>,
}

#[allow(dead_code)]
impl DeviceUiFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, script: Vec<UiEvent>) -> Self {
        Self {
            logger: logger.with_namespace("ui").with_namespace("fake"),
            script,
        }
    }
}

impl DeviceUi for DeviceUiFake {
    fn events(&self) -> std::sync::mpsc::Receiver<UiEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let script = self.script.clone();

        std::thread::spawn(move || {
            for event in script {
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        rx
    }
}
