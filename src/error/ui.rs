//! UI-related error types.
//!
//! Errors raised while driving the terminal, the clipboard or the image
//! viewer. Only terminal and logging failures are fatal; the rest are
//! recovered where they happen.

use thiserror::Error;

/// UI-specific error variants.
#[derive(Debug, Error)]
pub enum UiError {
    /// The system clipboard could not be opened.
    #[error("clipboard unavailable: {message}")]
    ClipboardUnavailable { message: String },

    /// The clipboard was opened but refused the text.
    #[error("clipboard write rejected: {message}")]
    ClipboardWriteRejected { message: String },

    /// An image reference could not be opened.
    #[error("failed to open image {url}: {message}")]
    ImageOpenFailed { url: String, message: String },

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The log directory or subscriber could not be set up.
    #[error("logging setup failed: {message}")]
    LoggingSetup { message: String },

    /// A command-line argument could not be understood.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl UiError {
    pub fn clipboard_unavailable(message: impl Into<String>) -> Self {
        UiError::ClipboardUnavailable {
            message: message.into(),
        }
    }

    pub fn clipboard_rejected(message: impl Into<String>) -> Self {
        UiError::ClipboardWriteRejected {
            message: message.into(),
        }
    }

    pub fn image_open_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        UiError::ImageOpenFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (UI can continue working).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UiError::ClipboardUnavailable { .. }
                | UiError::ClipboardWriteRejected { .. }
                | UiError::ImageOpenFailed { .. }
                | UiError::LoggingSetup { .. }
        )
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UiError::ClipboardUnavailable { .. } => "clipboard_unavailable",
            UiError::ClipboardWriteRejected { .. } => "clipboard_rejected",
            UiError::ImageOpenFailed { .. } => "image_open_failed",
            UiError::Terminal(_) => "terminal",
            UiError::LoggingSetup { .. } => "logging_setup",
            UiError::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_errors_are_recoverable() {
        assert!(UiError::clipboard_unavailable("no display").is_recoverable());
        assert!(UiError::clipboard_rejected("denied").is_recoverable());
    }

    #[test]
    fn test_terminal_error_is_fatal() {
        let err: UiError = std::io::Error::new(std::io::ErrorKind::Other, "gone").into();
        assert!(!err.is_recoverable());
        assert_eq!(err.kind(), "terminal");
    }

    #[test]
    fn test_display_messages() {
        let err = UiError::image_open_failed("https://example.com/a.png", "no browser");
        assert_eq!(
            err.to_string(),
            "failed to open image https://example.com/a.png: no browser"
        );
        assert_eq!(
            UiError::clipboard_unavailable("no display").to_string(),
            "clipboard unavailable: no display"
        );
    }
}
