//! Shared Error Types
//!
//! Validation failures raised while turning request bodies into domain
//! values. The backend maps every variant to `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use waitlist::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must contain '@'");
//! ```
use thiserror::Error;

/// Validation errors shared by request types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was absent or blank
    #[error("Missing field '{field}'")]
    MissingField {
        /// Name of the field as it appears on the wire
        field: String,
    },

    /// A field was present but its value is unacceptable
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wire name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field,
            Self::ValidationError { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let error = SharedError::missing("email");
        assert_eq!(error.field(), "email");
        assert_eq!(error.to_string(), "Missing field 'email'");
    }

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("firstName", "too long");
        let display = format!("{}", error);
        assert!(display.contains("firstName"));
        assert!(display.contains("too long"));
    }
}
