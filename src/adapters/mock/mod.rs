//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemoryClipboard`] - clipboard with acquisition/release accounting
//! - [`MockImageViewer`] - image viewer with configurable failures

pub mod clipboard;
pub mod viewer;

pub use clipboard::InMemoryClipboard;
pub use viewer::MockImageViewer;
