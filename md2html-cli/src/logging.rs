//! Logging initialization for the md2html binary.
//!
//! Structured logging via `tracing`, written to stderr in human-readable or
//! JSON form. `MD2HTML_LOG` overrides everything else when set.

use md2html_config::LogFormatConfig;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MD2HTML_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

impl From<LogFormatConfig> for LogFormat {
    fn from(config: LogFormatConfig) -> Self {
        match config {
            LogFormatConfig::Human => LogFormat::Human,
            LogFormatConfig::Json => LogFormat::Json,
        }
    }
}

impl LogFormat {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "human" => Some(LogFormat::Human),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Maps `-v` occurrences to a filter directive.
///
/// - 0 → `configured` (the `[log] level` setting)
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
pub fn verbosity_to_directive(verbosity: u8, configured: &str) -> &str {
    match verbosity {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(format: LogFormat, directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));
    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
