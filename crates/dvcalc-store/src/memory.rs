//! In-memory data value store
//!
//! A keyed table of data points guarded by a read/write lock. Cloning the
//! store clones the handle, not the rows, so one table can back many
//! calculators.

use dvcalc_types::{DataPoint, DataPointKey};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::predicate::Predicate;
use crate::provider::{DataValueStore, StoreError, StoreResult};

/// Insertion-ordered table of data points keyed by `DataPointKey`
#[derive(Clone, Default)]
pub struct InMemoryStore {
    rows: Arc<RwLock<IndexMap<DataPointKey, DataPoint>>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given points
    pub fn from_points(points: impl IntoIterator<Item = DataPoint>) -> Self {
        let store = Self::new();
        store.extend(points);
        store
    }

    /// Insert a point. A point with the same key replaces the stored one in
    /// place and the replaced record is returned.
    pub fn insert(&self, point: DataPoint) -> Option<DataPoint> {
        self.rows.write().insert(point.key(), point)
    }

    pub fn extend(&self, points: impl IntoIterator<Item = DataPoint>) {
        let mut rows = self.rows.write();
        for point in points {
            rows.insert(point.key(), point);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn clear(&self) {
        self.rows.write().clear();
    }

    /// Load points from a JSON document.
    ///
    /// Accepts either an array of data points or an object with a
    /// `dataValues` array.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        let rows = match document {
            Value::Array(rows) => Value::Array(rows),
            Value::Object(mut object) => object.remove("dataValues").ok_or_else(|| {
                StoreError::Parse("Expected an array or an object with a 'dataValues' array".to_string())
            })?,
            other => {
                return Err(StoreError::Parse(format!(
                    "Expected an array or an object, found {}",
                    json_kind(&other)
                )));
            }
        };

        let points: Vec<DataPoint> = serde_json::from_value(rows)?;
        log::debug!("Parsed {} data points", points.len());
        Ok(Self::from_points(points))
    }

    /// Load points from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&json)?;
        log::info!("Loaded {} data points from {}", store.len(), path.display());
        Ok(store)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl DataValueStore for InMemoryStore {
    fn select_all(&self) -> StoreResult<Vec<DataPoint>> {
        let rows = self.rows.read();
        log::trace!("select_all -> {} rows", rows.len());
        Ok(rows.values().cloned().collect())
    }

    fn select_matching(&self, predicate: &Predicate) -> StoreResult<Vec<DataPoint>> {
        let rows = self.rows.read();
        let matched = predicate.filter(rows.values());
        log::trace!("select_matching({}) -> {} rows", predicate, matched.len());
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvcalc_types::parse_timestamp;

    fn point(de: &str, pe: &str, value: &str) -> DataPoint {
        DataPoint::new(de, pe, "COC1", value, parse_timestamp("2021-01-01").unwrap())
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let store = InMemoryStore::new();
        assert!(store.insert(point("DE1", "P1", "1")).is_none());
        store.insert(point("DE2", "P1", "2"));

        let replaced = store.insert(point("DE1", "P1", "3"));
        assert_eq!(replaced.map(|p| p.value().to_string()), Some("1".to_string()));

        let values: Vec<String> = store
            .select_all()
            .unwrap()
            .iter()
            .map(|p| p.value().to_string())
            .collect();
        assert_eq!(values, vec!["3", "2"]);
    }

    #[test]
    fn test_clones_share_rows() {
        let store = InMemoryStore::new();
        let handle = store.clone();
        handle.insert(point("DE1", "P1", "1"));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_from_json_rejects_scalar() {
        let err = InMemoryStore::from_json("42").err().unwrap();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
