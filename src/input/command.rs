//! Command definitions for keyboard input handling.
//!
//! Every user interaction becomes a [`Command`], which the
//! [`App`](crate::app::App) applies in `dispatch`. Key bindings only decide
//! which command a key produces.

use crate::models::{AnalyticsTab, FigureId, SnippetId, StepId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    Quit,

    // =========================================================================
    // Analytics tabs
    // =========================================================================
    SelectTab(AnalyticsTab),
    NextTab,
    PreviousTab,

    // =========================================================================
    // Methodology steps
    // =========================================================================
    SelectStep(StepId),
    NextStep,
    PreviousStep,

    // =========================================================================
    // Actions
    // =========================================================================
    /// Copy a code block to the clipboard
    Copy(SnippetId),
    /// Open a figure's image in the external viewer
    OpenFigure(FigureId),

    // =========================================================================
    // Scrolling
    // =========================================================================
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
}

impl Command {
    /// Whether the command changes the selection state.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Command::SelectTab(_)
                | Command::NextTab
                | Command::PreviousTab
                | Command::SelectStep(_)
                | Command::NextStep
                | Command::PreviousStep
        )
    }
}
