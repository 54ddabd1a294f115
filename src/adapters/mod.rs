//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SystemClipboard`] - system clipboard through `arboard`
//! - [`BrowserViewer`] - figure images opened in the default browser
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod arboard_clipboard;
pub mod browser_viewer;
pub mod mock;

pub use arboard_clipboard::SystemClipboard;
pub use browser_viewer::BrowserViewer;
pub use mock::{InMemoryClipboard, MockImageViewer};
