//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the report as plain text; `None` uses the configured width
    Print(Option<u16>),
    /// An argument that could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

/// Narrowest page `--print` accepts.
pub const MIN_PRINT_WIDTH: u16 = 20;

/// Parse command-line arguments and return the command to run.
///
/// The first recognised flag wins; unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use decoding_chain::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["decoding-chain".to_string(), "--print=80".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Print(Some(80)));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--print" | "-p" => return CliCommand::Print(None),
            other => {
                if let Some(width) = other.strip_prefix("--print=") {
                    return parse_print_width(width);
                }
            }
        }
    }
    CliCommand::RunTui
}

fn parse_print_width(raw: &str) -> CliCommand {
    match raw.parse::<u16>() {
        Ok(width) if width >= MIN_PRINT_WIDTH => CliCommand::Print(Some(width)),
        Ok(width) => CliCommand::Invalid(format!(
            "print width {width} is too narrow (minimum {MIN_PRINT_WIDTH})"
        )),
        Err(_) => CliCommand::Invalid(format!("invalid print width: {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["decoding-chain".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_print_default_width() {
        assert_eq!(parse(&["--print"]), CliCommand::Print(None));
        assert_eq!(parse(&["-p"]), CliCommand::Print(None));
    }

    #[test]
    fn test_parse_print_with_width() {
        assert_eq!(parse(&["--print=120"]), CliCommand::Print(Some(120)));
    }

    #[test]
    fn test_parse_print_invalid_width() {
        assert!(matches!(parse(&["--print=wide"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--print=5"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_first_flag_wins() {
        assert_eq!(parse(&["--help", "--version"]), CliCommand::Help);
    }
}
