//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: decoding-chain [OPTIONS]

Browse the \"Decoding the Chain\" Ethereum report in the terminal.

Options:
  -p, --print[=WIDTH]  Print the report as plain text and exit
  -h, --help           Show this help
  -V, --version        Show the version

Environment:
  DECODING_CHAIN_LOG      Log filter (default: decoding_chain=info,warn)
  DECODING_CHAIN_LOG_DIR  Log directory
";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("decoding-chain {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    print!("{}", USAGE);
    std::process::exit(0)
}
