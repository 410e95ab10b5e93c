//! Error types for uncloak boundary operations.
//!
//! The cleaning engine itself is total and never fails; these errors come
//! from the I/O around it (files, clipboard, persisted settings).

use std::io;
use thiserror::Error;

/// Result type alias for uncloak operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for uncloak library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not valid UTF-8 text.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// Clipboard access denied or no clipboard tool available.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Settings backend missing or failing.
    #[error("Settings storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl Error {
    /// Returns true for failures that callers should absorb with a manual fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ClipboardUnavailable(_) | Error::StorageUnavailable(_)
        )
    }
}
