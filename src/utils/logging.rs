//! Logging setup for the command-line tool
//! Author: kartik4091

use std::fmt;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Severity threshold for operator logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(level_str)
    }
}

/// Installs a compact stderr subscriber filtered to this crate.
///
/// Stdout is left to the progress lines. Returns false if a global
/// subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("pdfscrub={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
