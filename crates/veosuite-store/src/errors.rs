//! Error handling for veosuite-store
//!
//! Wraps veosuite-core SuiteError with adapter-specific helpers

use veosuite_core::errors::SuiteError;

/// Result type alias using SuiteError
pub type Result<T> = veosuite_core::errors::Result<T>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> SuiteError {
    SuiteError::Io {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}

/// Create a persistence error for a rejected write
pub fn write_rejected(key: &str, message: impl Into<String>) -> SuiteError {
    SuiteError::Persistence {
        key: key.to_string(),
        message: message.into(),
    }
}
