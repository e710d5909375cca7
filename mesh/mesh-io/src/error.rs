//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer is too small to hold an STL header and triangle count.
    #[error("malformed STL: buffer holds {got} bytes, header needs at least 84")]
    BufferTooSmall {
        /// Actual buffer size in bytes.
        got: usize,
    },

    /// Buffer is shorter than the declared triangle count requires.
    #[error("malformed STL: expected at least {expected} bytes for {triangles} triangles, got {got}")]
    SizeMismatch {
        /// Minimum valid size given the declared triangle count.
        expected: usize,
        /// Actual buffer size in bytes.
        got: usize,
        /// Declared triangle count.
        triangles: u32,
    },
}

impl IoError {
    /// True for the malformed-buffer family of errors (non-retryable).
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. } | Self::SizeMismatch { .. })
    }
}
