//! Error types for the PDF metadata sanitizer
//! Author: kartik4091
//! Created: 2025-06-03

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for sanitizer operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for sanitizer operations.
///
/// Only whole-run failures live here. A stream that fails to inflate is not
/// an error: the stream pass leaves it untouched and moves on.
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Background task failed: {0}")]
    BackgroundTask(String),
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::BackgroundTask(err.to_string())
    }
}
