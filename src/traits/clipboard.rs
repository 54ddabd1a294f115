//! Clipboard trait abstraction.
//!
//! Copying is modelled as a scoped acquisition: a provider hands out a
//! short-lived [`ClipboardHandle`], the text is written through it, and the
//! handle is released when it goes out of scope, whether the write worked
//! or not.

use crate::error::ReportResult;

/// A transient, exclusively-owned handle to the system clipboard.
///
/// Dropping the handle releases the underlying clipboard resource.
pub trait ClipboardHandle {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> ReportResult<()>;
}

/// Source of clipboard handles.
///
/// # Example
///
/// ```ignore
/// use decoding_chain::traits::ClipboardProvider;
///
/// fn copy(provider: &dyn ClipboardProvider, text: &str) -> ReportResult<()> {
///     let mut handle = provider.acquire()?;
///     handle.set_text(text)
/// }
/// ```
pub trait ClipboardProvider: Send + Sync {
    /// Open a handle to the clipboard.
    fn acquire(&self) -> ReportResult<Box<dyn ClipboardHandle + '_>>;
}
