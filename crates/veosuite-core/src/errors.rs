use thiserror::Error;

/// Result type alias using SuiteError
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Error taxonomy for VeoSuite operations
///
/// Every variant here is recoverable: validation failures reject the input before
/// the collection is touched, and persistence failures leave the in-memory state
/// applied and authoritative until the next successful write.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SuiteError {
    /// User-supplied input failed a precondition
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A record with this identifier already exists in the collection
    #[error("Duplicate record id: {id}")]
    DuplicateId { id: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The persistence medium rejected a write
    #[error("Persistence error for key {key}: {message}")]
    Persistence { key: String, message: String },

    /// Filesystem error in the storage adapter
    #[error("IO error during {operation}: {message}")]
    Io { operation: String, message: String },
}

impl SuiteError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable identifiers for programmatic handling and testing.
    pub fn code(&self) -> &'static str {
        match self {
            SuiteError::Validation { .. } => "ERR_VALIDATION",
            SuiteError::DuplicateId { .. } => "ERR_DUPLICATE_ID",
            SuiteError::Serialization { .. } => "ERR_SERIALIZATION",
            SuiteError::Persistence { .. } => "ERR_PERSISTENCE",
            SuiteError::Io { .. } => "ERR_IO",
        }
    }

    /// Create a validation error for a named input field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SuiteError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Conversion from serde_json::Error to SuiteError
impl From<serde_json::Error> for SuiteError {
    fn from(err: serde_json::Error) -> Self {
        SuiteError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                SuiteError::validation("name", "cannot be empty"),
                "ERR_VALIDATION",
            ),
            (
                SuiteError::DuplicateId {
                    id: "c1".to_string(),
                },
                "ERR_DUPLICATE_ID",
            ),
            (
                SuiteError::Persistence {
                    key: "veo-suite-cookies".to_string(),
                    message: "quota exceeded".to_string(),
                },
                "ERR_PERSISTENCE",
            ),
            (
                SuiteError::Io {
                    operation: "write_value".to_string(),
                    message: "denied".to_string(),
                },
                "ERR_IO",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let bad: std::result::Result<Vec<String>, serde_json::Error> =
            serde_json::from_str("not json");
        let err: SuiteError = bad.unwrap_err().into();
        assert_eq!(err.code(), "ERR_SERIALIZATION");
    }
}
