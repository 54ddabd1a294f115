//! Image viewer adapter that opens figures in the default web browser.

use crate::error::{ReportResult, UiError};
use crate::traits::ImageViewer;

/// Opens image URLs with `webbrowser`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewer;

impl BrowserViewer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageViewer for BrowserViewer {
    fn open(&self, url: &str) -> ReportResult<()> {
        webbrowser::open(url).map_err(|e| UiError::image_open_failed(url, e.to_string()))
    }
}
