//! Error types for notemark library.
//!
//! The text operations themselves are total and never fail. Only the file
//! and serialization helpers return these errors.

use std::io;
use thiserror::Error;

/// Result type alias for notemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering notes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The note file is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// An option value was rejected.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding("invalid utf-8 sequence".into());
        assert_eq!(err.to_string(), "Encoding error: invalid utf-8 sequence");

        let err = Error::InvalidOption("max length must be a number".into());
        assert_eq!(
            err.to_string(),
            "Invalid option: max length must be a number"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
