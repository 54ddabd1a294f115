//! Recording image viewer for testing.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{ReportResult, UiError};
use crate::traits::ImageViewer;

#[derive(Debug, Default)]
struct ViewerState {
    opened: Vec<String>,
    failing_urls: HashSet<String>,
    fail_all: bool,
}

/// Image viewer that records requested URLs and fails on demand.
#[derive(Debug, Clone, Default)]
pub struct MockImageViewer {
    state: Arc<Mutex<ViewerState>>,
}

impl MockImageViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewer that cannot open anything.
    pub fn broken() -> Self {
        let viewer = Self::new();
        viewer.lock().fail_all = true;
        viewer
    }

    /// Make `url` fail to open.
    pub fn fail_url(&self, url: impl Into<String>) {
        self.lock().failing_urls.insert(url.into());
    }

    /// Every URL passed to `open`, in order, including failed ones.
    pub fn opened(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ViewerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ImageViewer for MockImageViewer {
    fn open(&self, url: &str) -> ReportResult<()> {
        let mut state = self.lock();
        state.opened.push(url.to_string());
        if state.fail_all || state.failing_urls.contains(url) {
            return Err(UiError::image_open_failed(url, "mock viewer failure"));
        }
        Ok(())
    }
}
