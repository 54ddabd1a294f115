//! Error handling for the report viewer.
//!
//! Library code returns [`ReportResult`]; the binary wraps everything in
//! `color_eyre::Result` once the terminal has been restored.

mod ui;

pub use ui::UiError;

/// Result alias used across the library.
pub type ReportResult<T> = Result<T, UiError>;
