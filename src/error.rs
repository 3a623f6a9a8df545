//! Error types for the mdexport library.

use std::io;
use thiserror::Error;

/// Result type alias for mdexport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or saving an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text-measurement capability failed to wrap a string.
    #[error("Text measurement error: {0}")]
    Measurement(String),

    /// A format writer failed to produce artifact bytes.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The requested output format is not recognized.
    #[error("Unknown export format: {0}")]
    InvalidFormat(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Render(err.to_string()),
        }
    }
}
