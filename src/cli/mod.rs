//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//! - `--version` / `-V` prints the version
//! - `--help` / `-h` prints usage
//! - `--print[=WIDTH]` renders the report to stdout
//!
//! ```ignore
//! use decoding_chain::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use print::handle_print_command;
pub use version::{handle_help_command, handle_version_command, VERSION};

use crate::config::AppConfig;
use crate::error::ReportResult;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(()))` - a CLI command ran successfully
/// * `Some(Err(e))` - a CLI command failed
///
/// `Version` and `Help` exit the process directly.
pub fn run_cli_command(command: CliCommand, config: &AppConfig) -> Option<ReportResult<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Print(width) => Some(handle_print_command(config, width)),
        CliCommand::Invalid(message) => Some(Err(crate::error::UiError::InvalidArgument { message })),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(CliCommand::RunTui, &AppConfig::default()).is_none());
    }

    #[test]
    fn test_invalid_returns_error() {
        let result = run_cli_command(CliCommand::Invalid("bad".into()), &AppConfig::default());
        assert!(matches!(result, Some(Err(_))));
    }
}
