//! Evaluation errors for the calculator

use dvcalc_store::StoreError;
use dvcalc_types::DataPoint;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone)]
pub enum EvalError {
    /// The working set held no data points
    #[error("No data points matched the filters")]
    NoData,

    /// A data point value is not a number
    #[error("Value '{value}' of {data_element}/{period} is not a number")]
    UnparseableValue {
        data_element: String,
        period: String,
        value: String,
    },

    /// Invalid configuration value
    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },

    /// Store adapter failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EvalError {
    /// Create an unparseable value error for a data point
    pub fn unparseable(point: &DataPoint) -> Self {
        Self::UnparseableValue {
            data_element: point.data_element().to_string(),
            period: point.period().to_string(),
            value: point.value().to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the error describes the data rather than the store
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::NoData | Self::UnparseableValue { .. })
    }
}
