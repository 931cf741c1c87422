//! Shared Error Types
//!
//! Errors that can occur before any network call is made: a form field
//! that fails validation, or a value that cannot be (de)serialized.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A single form field failed a required/format check
//!
//! # Usage
//!
//! ```rust
//! use pokedex::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Name is required");
//! assert_eq!(error.field(), Some("name"));
//! ```
use thiserror::Error;

/// Client-side errors that never reach the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field name for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }

    /// Message without the category prefix, for inline display
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } | Self::SerializationError { message } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
