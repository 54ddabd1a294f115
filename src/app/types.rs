//! Type definitions for the application state.
//!
//! - [`AppMessage`] - completions posted back to the event loop
//! - [`CopyOutcome`] - result of a copy command

use crate::models::SnippetId;

/// Messages delivered to the event loop from deferred tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A copy acknowledgement timer ran out.
    CopyAckExpired { snippet: SnippetId, generation: u64 },
}

/// What a copy command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text written; the acknowledgement is showing.
    Copied,
    /// The clipboard failed; nothing changed.
    Failed,
    /// There was nothing to copy (no step matches the selection).
    NothingToCopy,
}
