//! Error types for reportgen library.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for reportgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a report.
///
/// Only [`Error::InvalidSpec`] aborts the pipeline. Conversion errors are
/// produced by individual secondary converters and are absorbed by the
/// converter chain, which reports them as a [`crate::pipeline::Warning`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A report field violates its constraint.
    #[error("Invalid {field}: {reason}")]
    InvalidSpec {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint violation
        reason: String,
    },

    /// A secondary-format converter failed.
    #[error("Converter '{converter}' failed: {reason}")]
    Conversion {
        /// Converter name
        converter: String,
        /// Failure description
        reason: String,
    },

    /// An external converter did not finish within its time budget.
    #[error("Converter '{converter}' timed out after {timeout:?}")]
    ConverterTimeout {
        /// Converter name
        converter: String,
        /// Configured timeout
        timeout: Duration,
    },

    /// Error while serializing the document model to a primary format.
    #[error("Rendering error: {0}")]
    Render(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error building a PDF document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::InvalidSpec`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidSpec {
            field,
            reason: reason.into(),
        }
    }

    /// Build an [`Error::Conversion`].
    pub fn conversion(converter: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Conversion {
            converter: converter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error rejects the request before synthesis.
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, Error::InvalidSpec { .. })
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid("pages", "must be between 5 and 40, got 41");
        assert_eq!(
            err.to_string(),
            "Invalid pages: must be between 5 and 40, got 41"
        );

        let err = Error::ConverterTimeout {
            converter: "pandoc".to_string(),
            timeout: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "Converter 'pandoc' timed out after 60s");

        let err = Error::ConverterTimeout {
            converter: "pandoc".to_string(),
            timeout: Duration::from_millis(300),
        };
        assert_eq!(err.to_string(), "Converter 'pandoc' timed out after 300ms");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_invalid_spec());
    }

    #[test]
    fn test_is_invalid_spec() {
        assert!(Error::invalid("title", "must not be empty").is_invalid_spec());
        assert!(!Error::conversion("native-pdf", "boom").is_invalid_spec());
    }
}
