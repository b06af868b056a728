use crate::device_display::interface::{DeviceDisplay, DISPLAY_CHARS_PER_LINE, DISPLAY_LINES};
use std::error::Error;

pub struct DeviceDisplayConsole {
    display_buffer: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: vec![String::new(); DISPLAY_LINES],
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(DISPLAY_CHARS_PER_LINE));
        for line in &self.display_buffer {
            println!("│{:<width$}│", line, width = DISPLAY_CHARS_PER_LINE);
        }
        println!("└{}┘", "─".repeat(DISPLAY_CHARS_PER_LINE));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = vec![String::new(); DISPLAY_LINES];
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line] = text.chars().take(DISPLAY_CHARS_PER_LINE).collect();
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }
}
