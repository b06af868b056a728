use crate::classifier_app::core::{calculate_prediction, ModelStatus, State, CATEGORIES};
use crate::classifier_app::main::ClassifierApp;
use crate::image_classifier::interface::Prediction;

const TABLE_START_LINE: usize = 6;
const TABLE_MAX_ROWS: usize = 10;

impl ClassifierApp {
    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        device_display.clear()?;

        let status = match state.models.get(state.selected) {
            ModelStatus::Loading => "Loading model",
            ModelStatus::Loaded => "Model loaded",
            ModelStatus::Failed => "Failed to load model",
        };
        device_display.write_line(0, status)?;

        device_display.write_line(1, &format!("Model: {}", state.selected.as_str()))?;

        match &state.image {
            Some(path) => device_display.write_line(2, &format!("Image: {}", path.display()))?,
            None => device_display.write_line(2, "No image selected")?,
        }

        match &state.prediction {
            Some(Prediction::Scores(scores)) => {
                let winner = CATEGORIES
                    .get(calculate_prediction(scores))
                    .copied()
                    .unwrap_or("?");
                device_display.write_line(3, &format!("Prediction: {}", winner))?;

                device_display.write_line(5, &table_header())?;
                for (index, category) in CATEGORIES.iter().enumerate() {
                    let score = scores.get(index).copied().unwrap_or(0.0);
                    device_display.write_line(TABLE_START_LINE + index, &table_row(category, score))?;
                }
            }
            Some(Prediction::Ranked(classifications)) => {
                let winner = classifications
                    .first()
                    .map(|classification| classification.label.as_str())
                    .unwrap_or("?");
                device_display.write_line(3, &format!("Prediction: {}", winner))?;

                device_display.write_line(5, &table_header())?;
                for (index, classification) in
                    classifications.iter().take(TABLE_MAX_ROWS).enumerate()
                {
                    device_display.write_line(
                        TABLE_START_LINE + index,
                        &table_row(&classification.label, classification.confidence),
                    )?;
                }
            }
            None => {
                device_display.write_line(3, "Upload an image, then press predict")?;
            }
        }

        device_display.present()?;

        Ok(())
    }
}

fn table_header() -> String {
    format!("{:<24} {:>10}", "Category", "Percentage")
}

fn table_row(label: &str, probability: f32) -> String {
    format!("{:<24} {:>10}", label, format_percent(probability))
}

/// Render a [0, 1] probability as a percentage with four significant digits,
/// e.g. 0.8234567 becomes "82.35".
pub fn format_percent(probability: f32) -> String {
    let percent = probability as f64 * 100.0;
    if percent == 0.0 {
        return "0.000".to_string();
    }

    let exponent = percent.abs().log10().floor() as i32;
    let decimals = (3 - exponent).max(0) as usize;
    format!("{:.*}", decimals, percent)
}
