//! Shared fixtures for calculator tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use dvcalc_eval::DataValueCalculator;
use dvcalc_store::{DataValueStore, InMemoryStore, Predicate, StoreResult};
use dvcalc_types::{DataPoint, Timestamp};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Store {}

    impl DataValueStore for Store {
        fn select_all(&self) -> StoreResult<Vec<DataPoint>>;
        fn select_matching(&self, predicate: &Predicate) -> StoreResult<Vec<DataPoint>>;
    }
}

/// 2021-01-01T00:00:00 plus a number of days
pub fn day(offset: i64) -> Timestamp {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::days(offset)
}

pub fn point(data_element: &str, period: &str, value: &str) -> DataPoint {
    DataPoint::new(data_element, period, "COC1", value, day(0))
}

/// DE1 points with the given values, one per period `P1`, `P2`, ...
pub fn values(values: &[&str]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| point("DE1", &format!("P{}", i + 1), v))
        .collect()
}

/// `{DE1,P1}, {DE1,P2}, {DE2,P1}` with values 1, 2, 4
pub fn three_point_store() -> InMemoryStore {
    InMemoryStore::from_points(vec![
        point("DE1", "P1", "1"),
        point("DE1", "P2", "2"),
        point("DE2", "P1", "4"),
    ])
}

pub fn calculator(store: InMemoryStore) -> DataValueCalculator {
    DataValueCalculator::new(Arc::new(store))
}

pub fn mocked(store: MockStore) -> DataValueCalculator {
    DataValueCalculator::new(Arc::new(store))
}
