use crate::device_display::interface::{DeviceDisplay, DISPLAY_CHARS_PER_LINE, DISPLAY_LINES};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct DisplayWindow {
    display_buffer: Arc<Mutex<Vec<String>>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let display_buffer = self.display_buffer.lock().unwrap();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            for line in display_buffer.iter() {
                ui.label(
                    egui::RichText::new(if line.is_empty() { " " } else { line.as_str() })
                        .monospace(),
                );
            }
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    display_buffer: Arc<Mutex<Vec<String>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            display_buffer: Arc::new(Mutex::new(vec![String::new(); DISPLAY_LINES])),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let display_buffer = self.display_buffer.clone();

        // Spawn the window in a separate thread
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 360.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = DisplayWindow { display_buffer };

            // This will block in the new thread until the window is closed
            let _ = eframe::run_native(
                "Animal image classifier",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = self.display_buffer.lock().unwrap();
        *buffer = vec![String::new(); DISPLAY_LINES];
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }

        let mut buffer = self.display_buffer.lock().unwrap();
        buffer[line] = text.chars().take(DISPLAY_CHARS_PER_LINE).collect();
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
