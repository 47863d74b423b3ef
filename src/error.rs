//! Error types for the ctph fuzzy hashing library.
//!
//! The hashing and comparison algorithms never fail. Errors only come from
//! caller-supplied overrides, configuration loading and file access.

use thiserror::Error;

use crate::io::error::IoError;

/// Main error type for ctph operations.
#[derive(Debug, Error)]
pub enum CtphError {
    /// Block size override that is not `3 * 2^k` or does not fit the
    /// doubled resolution.
    #[error("Invalid block size: {block_size}")]
    InvalidBlockSize { block_size: u64 },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File access errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ctph operations
pub type Result<T> = std::result::Result<T, CtphError>;

impl From<serde_json::Error> for CtphError {
    fn from(err: serde_json::Error) -> Self {
        CtphError::Serialization(err.to_string())
    }
}

/// Convert ctph errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<CtphError> for pyo3::PyErr {
    fn from(err: CtphError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            CtphError::Io(e) => PyIOError::new_err(e.to_string()),
            CtphError::InvalidBlockSize { .. }
            | CtphError::InvalidInput(_)
            | CtphError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
            _ => PyException::new_err(err.to_string()),
        }
    }
}
