//! Default keybindings for the application.
//!
//! Maps key combinations to [`Command`]s. The report is keyboard-only; the
//! footer lists the main bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::models::{dataset::METHODOLOGY_STEPS, AnalyticsTab, FigureId, SnippetId};

/// Lines moved by a single scroll key.
pub const SCROLL_STEP: u16 = 1;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for KeyCombo {
    fn from(key: KeyEvent) -> Self {
        // Terminals disagree on whether uppercase letters and BackTab carry
        // SHIFT; normalise to the plain form for those.
        let modifiers = match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers.difference(KeyModifiers::SHIFT),
            KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_selection_bindings();
        config.setup_action_bindings();
        config.setup_scroll_bindings();

        config
    }

    /// Look up the command bound to a key event.
    pub fn resolve(&self, key: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyCombo::from(key)).copied()
    }

    /// Look up the command bound to a key combination.
    pub fn get(&self, combo: &KeyCombo) -> Option<Command> {
        self.bindings.get(combo).copied()
    }

    fn bind(&mut self, combo: KeyCombo, command: Command) {
        self.bindings.insert(combo, command);
    }

    fn setup_global_bindings(&mut self) {
        self.bind(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.bind(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.bind(KeyCombo::plain(KeyCode::Esc), Command::Quit);
    }

    fn setup_selection_bindings(&mut self) {
        // Analytics tabs
        self.bind(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        self.bind(KeyCombo::plain(KeyCode::BackTab), Command::PreviousTab);
        self.bind(KeyCombo::plain(KeyCode::Right), Command::NextTab);
        self.bind(KeyCombo::plain(KeyCode::Left), Command::PreviousTab);
        for (tab, key) in AnalyticsTab::ALL.iter().zip(['t', 'a', 'g', 'p']) {
            self.bind(KeyCombo::plain(KeyCode::Char(key)), Command::SelectTab(*tab));
        }

        // Methodology steps: digits jump, brackets cycle
        for step in METHODOLOGY_STEPS {
            if let Some(digit) = char::from_digit(step.id.0, 10) {
                self.bind(
                    KeyCombo::plain(KeyCode::Char(digit)),
                    Command::SelectStep(step.id),
                );
            }
        }
        self.bind(KeyCombo::plain(KeyCode::Char(']')), Command::NextStep);
        self.bind(KeyCombo::plain(KeyCode::Char('[')), Command::PreviousStep);
    }

    fn setup_action_bindings(&mut self) {
        self.bind(
            KeyCombo::plain(KeyCode::Char('c')),
            Command::Copy(SnippetId::Methodology),
        );
        self.bind(
            KeyCombo::plain(KeyCode::Char('C')),
            Command::Copy(SnippetId::Retrospective),
        );
        self.bind(
            KeyCombo::plain(KeyCode::Char('o')),
            Command::OpenFigure(FigureId::NetworkGraph),
        );
        self.bind(
            KeyCombo::plain(KeyCode::Char('O')),
            Command::OpenFigure(FigureId::PriceChart),
        );
    }

    fn setup_scroll_bindings(&mut self) {
        self.bind(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(SCROLL_STEP));
        self.bind(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown(SCROLL_STEP));
        self.bind(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(SCROLL_STEP));
        self.bind(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp(SCROLL_STEP));
        self.bind(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        self.bind(KeyCombo::plain(KeyCode::Char(' ')), Command::ScrollPageDown);
        self.bind(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        self.bind(KeyCombo::plain(KeyCode::Home), Command::ScrollToTop);
        self.bind(KeyCombo::plain(KeyCode::End), Command::ScrollToBottom);
    }
}
