//! Core error types for Staffboard

use thiserror::Error;

/// Result type alias using `StaffboardError`
pub type Result<T> = std::result::Result<T, StaffboardError>;

/// Core error type for Staffboard
#[derive(Error, Debug)]
pub enum StaffboardError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StaffboardError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
