//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when the user closes the input stream mid-session.
pub const EXIT_CANCELLED: u8 = 130;

/// Exit code for every other fatal error.
pub const EXIT_FAILURE: u8 = 1;

/// Main error type for readmegen operations
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// A single answer failed validation. The collector recovers from this
    /// by asking the same question again.
    #[error("Invalid answer for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Reading the terminal or writing the output file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A license name outside the supported set reached a lookup
    #[error("Unknown license: {0}")]
    UnknownLicense(String),

    /// Input ended before every question was answered
    #[error("Input cancelled before all questions were answered")]
    Cancelled,

    /// The question list produced no usable answer for a required field
    #[error("No answer collected for required field {0}")]
    MissingAnswer(&'static str),
}

impl ReadmeError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the collector should re-prompt instead of aborting
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Text shown to the user when an answer is rejected
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ReadmeError>;
