use crate::device_display::interface::{DeviceDisplay, DISPLAY_LINES};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records written lines so tests can assert on the rendered output.
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    lines: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger,
            lines: Arc::new(Mutex::new(vec![String::new(); DISPLAY_LINES])),
        }
    }

    pub fn lines_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.lines.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().unwrap();
        *lines = vec![String::new(); DISPLAY_LINES];
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }

        self.lines.lock().unwrap()[line] = text.to_string();
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
