//! Clipboard sink - the boundary the shell writes payloads through
//!
//! The engine never touches the clipboard itself; it hands text to a
//! `ClipboardSink`. The system implementation wraps `arboard`; tests use an
//! in-memory sink.

/// Accepts a single text payload; failure is reported as a human-readable
/// string for the shell to surface.
pub trait ClipboardSink {
    /// Write the payload to the sink
    ///
    /// # Errors
    ///
    /// Returns a displayable message when the platform clipboard rejects
    /// the write or is unavailable.
    fn write(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => clipboard
                .set_text(text)
                .map_err(|e| format!("Clipboard error: {e}")),
            Err(e) => Err(format!("Clipboard unavailable: {e}")),
        }
    }
}

/// In-memory sink for tests; remembers the last payload written
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), String> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
