use crate::device_ui::interface::{DeviceUi, UiEvent};
use crate::image_classifier::interface::ModelVariant;
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub struct DeviceUiConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceUiConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("ui").with_namespace("console"),
        }
    }
}

/// The file picker accepts .jpg, .jpeg and .png, case-insensitive.
fn is_image_path(path: &Path) -> bool {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some(extension) => IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str()),
        None => false,
    }
}

fn parse_command(line: &str) -> Result<Option<UiEvent>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let argument = parts.next().map(str::trim);

    match (command, argument) {
        ("image", Some(path)) => {
            let path = PathBuf::from(path);
            if is_image_path(&path) {
                Ok(Some(UiEvent::ImageChosen(path)))
            } else {
                Err("only .jpg, .jpeg and .png files are accepted".to_string())
            }
        }
        ("image", None) => Err("usage: image <path>".to_string()),
        ("model", Some(name)) => match ModelVariant::parse(name) {
            Some(variant) => Ok(Some(UiEvent::VariantChosen(variant))),
            None => Err(format!("unknown model: {} (expected v1, v2 or tf)", name)),
        },
        ("model", None) => Err("usage: model <v1|v2|tf>".to_string()),
        ("predict", _) => Ok(Some(UiEvent::PredictPressed)),
        ("quit", _) | ("exit", _) => Ok(Some(UiEvent::Quit)),
        (other, _) => Err(format!("unknown command: {}", other)),
    }
}

impl DeviceUi for DeviceUiConsole {
    fn events(&self) -> std::sync::mpsc::Receiver<UiEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = self.logger.clone();

        let _ = logger.info("Commands: image <path> | model <v1|v2|tf> | predict | quit");

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };

                match parse_command(&line) {
                    Ok(Some(UiEvent::Quit)) => {
                        let _ = tx.send(UiEvent::Quit);
                        return;
                    }
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => {
                        let _ = logger.info(&message);
                    }
                }
            }

            // stdin closed
            let _ = tx.send(UiEvent::Quit);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_extensions() {
        assert!(is_image_path(Path::new("cat.jpg")));
        assert!(is_image_path(Path::new("cat.jpeg")));
        assert!(is_image_path(Path::new("cat.png")));
        assert!(is_image_path(Path::new("CAT.PNG")));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!is_image_path(Path::new("cat.gif")));
        assert!(!is_image_path(Path::new("cat.onnx")));
        assert!(!is_image_path(Path::new("cat")));
    }

    #[test]
    fn test_parse_image_command() {
        assert_eq!(
            parse_command("image ./photos/cat.jpg"),
            Ok(Some(UiEvent::ImageChosen(PathBuf::from("./photos/cat.jpg"))))
        );
        assert!(parse_command("image notes.txt").is_err());
        assert!(parse_command("image").is_err());
    }

    #[test]
    fn test_parse_model_command() {
        assert_eq!(
            parse_command("model v2"),
            Ok(Some(UiEvent::VariantChosen(ModelVariant::V2)))
        );
        assert_eq!(
            parse_command("model tf"),
            Ok(Some(UiEvent::VariantChosen(ModelVariant::Tf)))
        );
        assert!(parse_command("model v3").is_err());
    }

    #[test]
    fn test_parse_predict_and_quit() {
        assert_eq!(parse_command("predict"), Ok(Some(UiEvent::PredictPressed)));
        assert_eq!(parse_command("quit"), Ok(Some(UiEvent::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("launch").is_err());
    }
}
