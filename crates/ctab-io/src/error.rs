//! Error types for molfile decoding

use ctab_mol::MolError;
use thiserror::Error;

/// Errors that can occur while decoding a molfile/SD stream.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntactic or structural error in the content
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// A fixed-width field that does not convert to the expected type
    #[error("cannot convert '{field}' to {expected}")]
    BadField {
        /// The raw field text
        field: String,
        /// What the field was expected to hold
        expected: &'static str,
    },

    /// File is empty or contains no molecules
    #[error("empty file or no molecules found")]
    EmptyFile,

    /// Error raised by the molecular data model or its perception passes
    #[error(transparent)]
    Mol(#[from] MolError),
}

impl IoError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a bad-field error for a fixed-width field
    pub fn bad_field(field: &str, expected: &'static str) -> Self {
        IoError::BadField {
            field: field.to_string(),
            expected,
        }
    }

    /// Attach a line number, turning field-level errors into parse errors.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            IoError::BadField { field, expected } => IoError::Parse {
                line,
                message: format!("cannot convert '{field}' to {expected}"),
            },
            IoError::Parse { message, .. } => IoError::Parse { line, message },
            other => other,
        }
    }
}

/// Result type for molfile decoding
pub type IoResult<T> = Result<T, IoError>;
