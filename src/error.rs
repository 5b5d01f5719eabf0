//! Error types for the termbase library.

use std::io;
use thiserror::Error;

/// Result type alias for termbase operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading documents or rendering output.
///
/// The core parsing and context-extraction algorithms are total: they
/// degrade to "produce nothing" on malformed content instead of failing.
/// Errors only arise in the collaborator layers around them.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The named document section could not be located.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Error decoding a serialized document into blocks.
    #[error("Document parsing error: {0}")]
    DocumentParse(String),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SectionNotFound("Metadata".to_string());
        assert_eq!(err.to_string(), "Section not found: Metadata");

        let err = Error::DocumentParse("bad block array".to_string());
        assert_eq!(err.to_string(), "Document parsing error: bad block array");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
