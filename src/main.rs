use classifier_app::main::ClassifierApp;
use config::Config;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_ui::impl_console::DeviceUiConsole;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use model_fetcher::impl_http::ModelFetcherHttp;
use std::sync::{Arc, Mutex};

mod classifier_app;
mod config;
mod device_display;
mod device_ui;
mod image_classifier;
mod library;
mod model_fetcher;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_ui = Arc::new(DeviceUiConsole::new(logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if std::env::args().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    let model_fetcher = Arc::new(ModelFetcherHttp::new(logger.clone()));

    let app = ClassifierApp::new(config, logger, device_ui, device_display, model_fetcher);

    app.run()?;

    Ok(())
}
