use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub v1_model: ModelConfig,
    pub v2_model: ModelConfig,
    pub general_model_url: String,
    pub general_labels_url: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            v1_model: ModelConfig {
                model_url: "http://127.0.0.1:5500/v1/model.onnx".to_string(),
                input_shape: (80, 80),
            },
            v2_model: ModelConfig {
                model_url: "http://127.0.0.1:5500/v2/model.onnx".to_string(),
                input_shape: (180, 180),
            },
            general_model_url:
                "https://github.com/onnx/models/raw/main/validated/vision/classification/mobilenet/model/mobilenetv2-7.onnx"
                    .to_string(),
            general_labels_url:
                "https://raw.githubusercontent.com/onnx/models/main/validated/vision/classification/synset.txt"
                    .to_string(),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
