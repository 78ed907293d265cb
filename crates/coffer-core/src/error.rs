//! Error types for Coffer core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Coffer operations.
pub type Result<T> = std::result::Result<T, CofferError>;

/// Core error type for Coffer operations.
#[derive(Debug, Error)]
pub enum CofferError {
    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset file error
    #[error("Data error: {0}")]
    Data(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for CofferError {
    fn from(err: std::io::Error) -> Self {
        CofferError::Data(err.to_string())
    }
}

impl From<serde_json::Error> for CofferError {
    fn from(err: serde_json::Error) -> Self {
        CofferError::Validation(err.to_string())
    }
}
