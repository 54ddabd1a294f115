//! Application state and command dispatch.
//!
//! [`App`] is the presentation shell: it owns the [`ViewState`], the copy
//! acknowledgements, the figure sources and the scroll position, and applies
//! [`Command`]s to them. Rendering reads it through [`crate::ui::render`].

mod copy;
mod figures;
mod types;

pub use copy::{copy_text, AckPhase, CopyAck};
pub use figures::{FigureGallery, FigureState, OpenOutcome};
pub use types::{AppMessage, CopyOutcome};

use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::adapters::{BrowserViewer, SystemClipboard};
use crate::config::AppConfig;
use crate::input::{Command, KeybindingConfig};
use crate::models::{dataset::CHALLENGES_CODE, FigureId, SnippetId};
use crate::traits::{ClipboardProvider, ImageViewer};
use crate::view_state::{ScrollState, ViewState};

pub struct App {
    /// Active tab and selected step
    pub view: ViewState,
    /// Page viewport
    pub scroll: ScrollState,
    /// Current figure sources
    pub figures: FigureGallery,
    pub keybindings: KeybindingConfig,
    pub config: AppConfig,
    /// Set whenever state changes; cleared after a draw
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Counts event loop ticks
    pub tick_count: u64,
    /// Sender handed to deferred tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    copy_acks: HashMap<SnippetId, CopyAck>,
    clipboard: Arc<dyn ClipboardProvider>,
    viewer: Arc<dyn ImageViewer>,
}

impl App {
    /// App wired to the system clipboard and the default browser.
    pub fn new(config: AppConfig) -> Self {
        Self::with_adapters(config, Arc::new(SystemClipboard::new()), Arc::new(BrowserViewer::new()))
    }

    /// App with injected clipboard and image viewer.
    pub fn with_adapters(
        config: AppConfig,
        clipboard: Arc<dyn ClipboardProvider>,
        viewer: Arc<dyn ImageViewer>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let copy_acks = SnippetId::ALL
            .into_iter()
            .map(|snippet| (snippet, CopyAck::new(snippet)))
            .collect();

        Self {
            view: ViewState::new(),
            scroll: ScrollState::new(),
            figures: FigureGallery::new(),
            keybindings: KeybindingConfig::new(),
            config,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            copy_acks,
            clipboard,
            viewer,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Translate a key press and apply it. Returns false for unbound keys.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.keybindings.resolve(key) {
            Some(command) => {
                self.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Apply a command.
    ///
    /// `Command::Copy` schedules a reset task and therefore needs a tokio
    /// runtime.
    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!(?command, "dispatch");
        self.mark_dirty();

        match command {
            Command::Quit => self.quit(),

            Command::SelectTab(tab) => self.view.select_tab(tab),
            Command::NextTab => self.view.next_tab(),
            Command::PreviousTab => self.view.previous_tab(),

            Command::SelectStep(id) => self.view.select_step(id),
            Command::NextStep => self.view.next_step(),
            Command::PreviousStep => self.view.previous_step(),

            Command::Copy(snippet) => {
                self.copy_snippet(snippet);
            }
            Command::OpenFigure(id) => {
                self.open_figure(id);
            }

            Command::ScrollUp(lines) => self.scroll.scroll_up(lines),
            Command::ScrollDown(lines) => self.scroll.scroll_down(lines),
            Command::ScrollPageUp => self.scroll.page_up(),
            Command::ScrollPageDown => self.scroll.page_down(),
            Command::ScrollToTop => self.scroll.scroll_to_top(),
            Command::ScrollToBottom => self.scroll.scroll_to_bottom(),
        }
    }

    /// Apply a message from a deferred task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CopyAckExpired {
                snippet,
                generation,
            } => {
                if let Some(ack) = self.copy_acks.get_mut(&snippet) {
                    if ack.expire(generation) {
                        self.mark_dirty();
                    }
                }
            }
        }
    }

    // ========================================================================
    // Copy
    // ========================================================================

    /// Text of a copyable code block, if it is currently shown.
    pub fn snippet_text(&self, snippet: SnippetId) -> Option<&'static str> {
        match snippet {
            SnippetId::Methodology => self.displayed_code(),
            SnippetId::Retrospective => Some(CHALLENGES_CODE),
        }
    }

    /// Code sample shown next to the step list, if the selection matches a step.
    pub fn displayed_code(&self) -> Option<&'static str> {
        self.view.selected_step_definition().map(|step| step.code_sample)
    }

    /// Copy a code block and acknowledge it on success.
    pub fn copy_snippet(&mut self, snippet: SnippetId) -> CopyOutcome {
        let Some(text) = self.snippet_text(snippet) else {
            tracing::debug!(
                snippet = snippet.label(),
                step = %self.view.selected_step(),
                "no code sample for the selected step"
            );
            return CopyOutcome::NothingToCopy;
        };

        match copy_text(self.clipboard.as_ref(), text) {
            Ok(()) => {
                let duration = self.config.copy_ack_duration;
                if let Some(ack) = self.copy_acks.get_mut(&snippet) {
                    ack.acknowledge(duration, &self.message_tx);
                }
                tracing::info!(snippet = snippet.label(), bytes = text.len(), "copied to clipboard");
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!(snippet = snippet.label(), error = %e, "failed to copy");
                CopyOutcome::Failed
            }
        }
    }

    pub fn copy_ack(&self, snippet: SnippetId) -> Option<&CopyAck> {
        self.copy_acks.get(&snippet)
    }

    /// Whether a code block currently shows "Copied!".
    pub fn copy_acknowledged(&self, snippet: SnippetId) -> bool {
        self.copy_acks
            .get(&snippet)
            .is_some_and(CopyAck::is_acknowledged)
    }

    // ========================================================================
    // Figures
    // ========================================================================

    pub fn open_figure(&mut self, id: FigureId) -> OpenOutcome {
        self.figures.open(id, self.viewer.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryClipboard, MockImageViewer};
    use crate::models::{AnalyticsTab, StepId};

    fn test_app(clipboard: InMemoryClipboard) -> App {
        App::with_adapters(
            AppConfig::default(),
            Arc::new(clipboard),
            Arc::new(MockImageViewer::new()),
        )
    }

    #[test]
    fn test_app_starts_dirty() {
        let app = test_app(InMemoryClipboard::new());
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_dispatch_marks_dirty() {
        let mut app = test_app(InMemoryClipboard::new());
        app.needs_redraw = false;
        app.dispatch(Command::SelectTab(AnalyticsTab::GasUsage));
        assert!(app.needs_redraw);
        assert_eq!(app.view.active_tab(), AnalyticsTab::GasUsage);
    }

    #[test]
    fn test_displayed_code_follows_step() {
        let mut app = test_app(InMemoryClipboard::new());
        app.dispatch(Command::SelectStep(StepId(2)));
        assert!(app.displayed_code().unwrap().starts_with("def load_data(...):"));
    }

    #[test]
    fn test_copy_with_unknown_step_does_nothing() {
        let clipboard = InMemoryClipboard::new();
        let mut app = test_app(clipboard.clone());
        app.view.select_step(StepId(9));
        assert_eq!(app.copy_snippet(SnippetId::Methodology), CopyOutcome::NothingToCopy);
        assert_eq!(clipboard.acquisitions(), 0);
        assert!(!app.copy_acknowledged(SnippetId::Methodology));
    }

    #[test]
    fn test_failed_copy_keeps_ack_idle() {
        let mut app = test_app(InMemoryClipboard::unavailable());
        assert_eq!(app.copy_snippet(SnippetId::Retrospective), CopyOutcome::Failed);
        assert!(!app.copy_acknowledged(SnippetId::Retrospective));
    }

    #[test]
    fn test_quit_command() {
        let mut app = test_app(InMemoryClipboard::new());
        app.dispatch(Command::Quit);
        assert!(app.should_quit);
    }
}
