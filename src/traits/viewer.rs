//! Image viewer trait abstraction.
//!
//! A terminal cannot draw the report's figures inline, so figures are handed
//! to an external viewer by URL.

use crate::error::ReportResult;

/// Something that can display an image given its URL.
pub trait ImageViewer: Send + Sync {
    /// Open `url` for viewing. An error means the image could not be loaded.
    fn open(&self, url: &str) -> ReportResult<()>;
}
