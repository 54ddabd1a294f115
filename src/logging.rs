//! Logging configuration using tracing
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file under
//! `<data_local_dir>/decoding-chain/logs/` (or the configured directory).
//! The filter comes from [`AppConfig::log_filter`].

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::AppConfig;
use crate::error::{ReportResult, UiError};

const LOG_FILE_PREFIX: &str = "decoding-chain.log";

/// Initialize the logging subsystem.
///
/// Returns the directory logs are written to.
pub fn init(config: &AppConfig) -> ReportResult<PathBuf> {
    let log_dir = log_directory(config);
    std::fs::create_dir_all(&log_dir).map_err(|e| UiError::LoggingSetup {
        message: format!("cannot create {}: {}", log_dir.display(), e),
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("decoding_chain=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| UiError::LoggingSetup {
            message: e.to_string(),
        })?;

    tracing::info!("Decoding the Chain starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// Directory logs are written to for `config`.
pub fn log_directory(config: &AppConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("decoding-chain").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_override() {
        let config = AppConfig::default().with_log_dir("/var/tmp/dc");
        assert_eq!(log_directory(&config), PathBuf::from("/var/tmp/dc"));
    }

    #[test]
    fn test_default_log_directory_suffix() {
        let dir = log_directory(&AppConfig::default());
        assert!(dir.ends_with("decoding-chain/logs"));
    }
}
