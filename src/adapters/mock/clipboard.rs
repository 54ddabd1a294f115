//! In-memory clipboard for testing.
//!
//! Records every acquisition and release so tests can check that handles
//! are always given back, including when a write fails.

use std::sync::{Arc, Mutex};

use crate::error::{ReportResult, UiError};
use crate::traits::{ClipboardHandle, ClipboardProvider};

#[derive(Debug, Default)]
struct ClipboardState {
    contents: Option<String>,
    acquire_should_fail: bool,
    write_should_fail: bool,
    acquisitions: usize,
    releases: usize,
    writes: usize,
}

/// Clipboard provider that keeps its contents in memory.
///
/// # Example
///
/// ```ignore
/// let clipboard = InMemoryClipboard::new();
/// copy_text(&clipboard, "hello")?;
/// assert_eq!(clipboard.contents().as_deref(), Some("hello"));
/// assert_eq!(clipboard.acquisitions(), clipboard.releases());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    state: Arc<Mutex<ClipboardState>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose `acquire` always fails, like a headless session.
    pub fn unavailable() -> Self {
        let clipboard = Self::new();
        clipboard.set_acquire_should_fail(true);
        clipboard
    }

    /// A clipboard that opens but rejects every write.
    pub fn rejecting() -> Self {
        let clipboard = Self::new();
        clipboard.set_write_should_fail(true);
        clipboard
    }

    pub fn set_acquire_should_fail(&self, should_fail: bool) {
        self.lock().acquire_should_fail = should_fail;
    }

    pub fn set_write_should_fail(&self, should_fail: bool) {
        self.lock().write_should_fail = should_fail;
    }

    /// Current clipboard contents.
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Number of handles handed out.
    pub fn acquisitions(&self) -> usize {
        self.lock().acquisitions
    }

    /// Number of handles dropped.
    pub fn releases(&self) -> usize {
        self.lock().releases
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClipboardState> {
        // A poisoned lock only means another test thread panicked mid-update.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

struct InMemoryHandle {
    state: Arc<Mutex<ClipboardState>>,
}

impl ClipboardHandle for InMemoryHandle {
    fn set_text(&mut self, text: &str) -> ReportResult<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.write_should_fail {
            return Err(UiError::clipboard_rejected("write rejected by mock"));
        }
        state.contents = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}

impl Drop for InMemoryHandle {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.releases += 1;
    }
}

impl ClipboardProvider for InMemoryClipboard {
    fn acquire(&self) -> ReportResult<Box<dyn ClipboardHandle + '_>> {
        let mut state = self.lock();
        if state.acquire_should_fail {
            return Err(UiError::clipboard_unavailable("no clipboard in mock"));
        }
        state.acquisitions += 1;
        Ok(Box::new(InMemoryHandle {
            state: Arc::clone(&self.state),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_release_counted_on_drop() {
        let clipboard = InMemoryClipboard::new();
        {
            let mut handle = clipboard.acquire().unwrap();
            handle.set_text("abc").unwrap();
            assert_eq!(clipboard.releases(), 0);
        }
        assert_eq!(clipboard.acquisitions(), 1);
        assert_eq!(clipboard.releases(), 1);
        assert_eq!(clipboard.contents().as_deref(), Some("abc"));
    }

    #[test]
    fn test_unavailable_clipboard_hands_out_nothing() {
        let clipboard = InMemoryClipboard::unavailable();
        assert!(clipboard.acquire().is_err());
        assert_eq!(clipboard.acquisitions(), 0);
        assert_eq!(clipboard.releases(), 0);
    }

    #[test]
    fn test_rejecting_clipboard_keeps_contents() {
        let clipboard = InMemoryClipboard::rejecting();
        let mut handle = clipboard.acquire().unwrap();
        assert!(handle.set_text("abc").is_err());
        drop(handle);
        assert!(clipboard.contents().is_none());
        assert_eq!(clipboard.releases(), 1);
    }
}
