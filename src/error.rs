//! Error types for Threadlens.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Threadlens operations.
pub type Result<T> = std::result::Result<T, ThreadlensError>;

/// Errors that can occur in Threadlens.
#[derive(Debug, Error)]
pub enum ThreadlensError {
    /// Failed to open a dump file.
    #[error("Failed to open dump file: {path}")]
    FileOpen {
        /// Path of the file that could not be opened.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid thread dump payload.
    #[error("Failed to parse thread dump: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value could not be rendered as a date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A value could not be rendered as a number.
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThreadlensError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an InvalidDate error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }
}

impl From<chrono::ParseError> for ThreadlensError {
    fn from(err: chrono::ParseError) -> Self {
        Self::InvalidDate(err.to_string())
    }
}
