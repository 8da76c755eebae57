//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while parsing or writing a mesh.
///
/// Parse variants carry the 1-based line number of the offending record.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A vertex coordinate is not a finite floating-point number.
    #[error("line {line}: invalid vertex coordinate {token:?}")]
    InvalidFloat {
        /// Source line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A face-vertex reference is not a positive integer.
    #[error("line {line}: invalid face vertex reference {token:?}")]
    InvalidIndex {
        /// Source line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A vertex record has fewer than three coordinates.
    #[error("line {line}: vertex record has {found} coordinate(s), expected 3")]
    MissingCoordinate {
        /// Source line number.
        line: usize,
        /// Number of coordinates present.
        found: usize,
    },

    /// A face record has a vertex count other than 3 or 4.
    #[error("line {line}: face with {count} vertices is not supported (expected 3 or 4)")]
    UnsupportedFaceArity {
        /// Source line number.
        line: usize,
        /// Number of face-vertex references on the record.
        count: usize,
    },

    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_line() {
        let err = IoError::InvalidFloat {
            line: 12,
            token: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "line 12: invalid vertex coordinate \"1.2.3\"");
    }

    #[test]
    fn write_error_names_the_path() {
        let err = IoError::WriteFailed {
            path: PathBuf::from("js/face-data.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("failed to write js/face-data.js"));
    }
}
