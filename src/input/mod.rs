//! Keyboard input handling.
//!
//! Key events are translated into [`Command`]s through a
//! [`KeybindingConfig`]; the app applies commands without knowing which key
//! produced them.

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
