//! Errors raised while building data value types

use thiserror::Error;

/// Result type for type construction and parsing
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors that can occur while parsing data value types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Text is not a timestamp in any accepted layout
    #[error("Invalid timestamp '{value}': expected {expected}")]
    InvalidTimestamp { value: String, expected: String },
}

impl TypeError {
    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            expected: "YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[.sss]".to_string(),
        }
    }
}
