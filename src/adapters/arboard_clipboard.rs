//! System clipboard adapter backed by `arboard`.

use arboard::Clipboard;

use crate::error::{ReportResult, UiError};
use crate::traits::{ClipboardHandle, ClipboardProvider};

/// Opens a fresh `arboard::Clipboard` for every copy.
///
/// The clipboard connection lives only as long as the returned handle, so
/// nothing is held open between copies.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

struct ArboardHandle {
    clipboard: Clipboard,
}

impl ClipboardHandle for ArboardHandle {
    fn set_text(&mut self, text: &str) -> ReportResult<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| UiError::clipboard_rejected(e.to_string()))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn acquire(&self) -> ReportResult<Box<dyn ClipboardHandle + '_>> {
        let clipboard =
            Clipboard::new().map_err(|e| UiError::clipboard_unavailable(e.to_string()))?;
        Ok(Box::new(ArboardHandle { clipboard }))
    }
}
