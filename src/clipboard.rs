//! Clipboard access for copying the display.

use arboard::Clipboard;

/// System clipboard opened on first copy.
///
/// Opening can fail on headless sessions; the error is reported per copy
/// and opening is retried on the next one.
#[derive(Default)]
pub struct DisplayClipboard {
    clipboard: Option<Clipboard>,
}

impl DisplayClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the display text to the system clipboard.
    pub fn copy(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?,
        };
        let result = clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e));
        self.clipboard = Some(clipboard);
        result
    }
}
