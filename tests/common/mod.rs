//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let fixture = TestAppBuilder::new().with_clipboard(InMemoryClipboard::unavailable()).build();
//! fixture.app.dispatch(Command::Copy(SnippetId::Methodology));
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use decoding_chain::adapters::{InMemoryClipboard, MockImageViewer};
use decoding_chain::app::App;
use decoding_chain::config::AppConfig;
use decoding_chain::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// An app wired to in-memory adapters, with handles to inspect them.
pub struct TestFixture {
    pub app: App,
    pub clipboard: InMemoryClipboard,
    pub viewer: MockImageViewer,
}

/// Builder for test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    config: Option<AppConfig>,
    clipboard: Option<InMemoryClipboard>,
    viewer: Option<MockImageViewer>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_clipboard(mut self, clipboard: InMemoryClipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_viewer(mut self, viewer: MockImageViewer) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn build(self) -> TestFixture {
        let clipboard = self.clipboard.unwrap_or_default();
        let viewer = self.viewer.unwrap_or_default();
        let app = App::with_adapters(
            self.config.unwrap_or_default(),
            Arc::new(clipboard.clone()),
            Arc::new(viewer.clone()),
        );
        TestFixture {
            app,
            clipboard,
            viewer,
        }
    }
}

/// Key press without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Key press for a printable character, with SHIFT for uppercase.
pub fn char_key(c: char) -> KeyEvent {
    let modifiers = if c.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    KeyEvent::new(KeyCode::Char(c), modifiers)
}

/// Draw the app once into a test terminal and return the buffer.
pub fn render_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
