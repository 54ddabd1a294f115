//! Runtime configuration.
//!
//! Use the builder methods to customise behaviour, or [`AppConfig::from_env`]
//! to pick up the logging overrides from the environment.
//!
//! ```ignore
//! use decoding_chain::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_tick_rate(Duration::from_millis(50))
//!     .with_log_filter("decoding_chain=debug");
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// How long a code block shows "Copied!" after a successful copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// Environment variable holding the tracing filter.
pub const LOG_FILTER_ENV: &str = "DECODING_CHAIN_LOG";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "DECODING_CHAIN_LOG_DIR";

const DEFAULT_LOG_FILTER: &str = "decoding_chain=info,warn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Event loop wake-up interval
    pub tick_rate: Duration,
    /// Lifetime of the copy acknowledgement
    pub copy_ack_duration: Duration,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
    /// Log directory override (default: platform data dir)
    pub log_dir: Option<PathBuf>,
    /// Width used by `--print` when none is given
    pub print_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            copy_ack_duration: COPY_ACK_DURATION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
            print_width: 100,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_copy_ack_duration(mut self, duration: Duration) -> Self {
        self.copy_ack_duration = duration;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_print_width(mut self, width: u16) -> Self {
        self.print_width = width;
        self
    }

    /// Defaults plus `DECODING_CHAIN_LOG` / `DECODING_CHAIN_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by `from_env` and tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_dir(dir);
        }
        config
    }
}
