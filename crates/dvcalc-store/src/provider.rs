//! Store adapter contract

use dvcalc_types::DataPoint;

use crate::predicate::Predicate;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Source of data points for a calculator.
///
/// Calls are blocking and may be expensive. A store is read-only from the
/// calculator's point of view and may be shared by any number of
/// calculators. Timeouts and retries, if any, belong to the implementation.
pub trait DataValueStore: Send + Sync {
    /// Full scan. Order is implementation defined but stable between calls
    /// that are not separated by writes.
    fn select_all(&self) -> StoreResult<Vec<DataPoint>>;

    /// Points satisfying a single-column predicate, in store order
    fn select_matching(&self, predicate: &Predicate) -> StoreResult<Vec<DataPoint>>;
}

/// Store error
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}

/// Store with no data, for wiring and tests
pub struct NoOpStore;

impl DataValueStore for NoOpStore {
    fn select_all(&self) -> StoreResult<Vec<DataPoint>> {
        Ok(vec![])
    }

    fn select_matching(&self, _predicate: &Predicate) -> StoreResult<Vec<DataPoint>> {
        Ok(vec![])
    }
}

impl NoOpStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpStore {
    fn default() -> Self {
        Self::new()
    }
}
