//! Error types for OxiArc transform operations.
//!
//! Every stage of the block-sorting pipeline reports failures through
//! [`OxiArcError`]. Argument errors are raised eagerly at the entry point of
//! each stage, before any output is produced.

use std::io;
use thiserror::Error;

/// The main error type for OxiArc operations.
#[derive(Debug, Error)]
pub enum OxiArcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument was rejected at the call boundary.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// A positional query fell outside the valid range.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of valid positions.
        len: usize,
    },

    /// Corrupted data detected by a consistency check.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Position where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of file: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for OxiArc operations.
pub type Result<T> = std::result::Result<T, OxiArcError>;

impl OxiArcError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiArcError::invalid_argument("text must not be empty");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("text must not be empty"));

        let err = OxiArcError::index_out_of_range(7, 4);
        assert_eq!(err.to_string(), "Index 7 out of range for length 4");

        let err = OxiArcError::corrupted(3, "uneven cycles");
        assert!(err.to_string().contains("offset 3"));

        let err = OxiArcError::unexpected_eof(2);
        assert!(err.to_string().contains("2 more bytes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiArcError = io_err.into();
        assert!(matches!(err, OxiArcError::Io(_)));
    }
}
