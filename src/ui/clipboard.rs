//! System clipboard access.

use tracing::{debug, warn};

/// Opens the platform clipboard on first use and keeps it for the session.
#[derive(Default)]
pub struct ClipboardService {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `text` on the clipboard.
    pub fn copy_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            slot @ None => slot.insert(arboard::Clipboard::new()?),
        };
        clipboard.set_text(text.to_owned()).inspect_err(|e| {
            warn!(error = %e, "clipboard write failed");
        })?;
        debug!(len = text.len(), "copied to clipboard");
        Ok(())
    }
}
