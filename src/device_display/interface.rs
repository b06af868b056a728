use std::error::Error;

pub const DISPLAY_LINES: usize = 16;
pub const DISPLAY_CHARS_PER_LINE: usize = 44;

/// A line-oriented text panel the application renders into.
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the panel (opens the window for windowed implementations)
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear all text from the panel
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a specific line (0-based index).
    /// Returns error if the line number is out of range.
    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Make the written lines visible. Buffered implementations flush here.
    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Number of lines the panel supports
    #[allow(dead_code)]
    fn num_lines(&self) -> usize {
        DISPLAY_LINES
    }

    /// Number of characters per line the panel supports
    #[allow(dead_code)]
    fn chars_per_line(&self) -> usize {
        DISPLAY_CHARS_PER_LINE
    }
}
