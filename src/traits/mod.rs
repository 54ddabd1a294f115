//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ClipboardProvider`] / [`ClipboardHandle`] - scoped clipboard writes
//! - [`ImageViewer`] - opening figure images outside the terminal

pub mod clipboard;
pub mod viewer;

pub use clipboard::{ClipboardHandle, ClipboardProvider};
pub use viewer::ImageViewer;
