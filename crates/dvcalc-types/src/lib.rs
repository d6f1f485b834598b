//! Data value types
//!
//! This crate defines the values the calculator works on:
//! - `DataPoint`: one numeric fact (data element, period, category option combo, textual value)
//! - `DataPointKey`: the identity of a data point inside a keyed store
//! - `AggregationType` / `AggregationKind`: the reducer selector and its normalization
//! - `Timestamp` helpers for the textual date format used by stores and where clauses

pub mod aggregation;
pub mod data_point;
pub mod error;
pub mod timestamp;

pub use aggregation::{AggregationKind, AggregationType};
pub use data_point::{DataPoint, DataPointKey};
pub use error::{TypeError, TypeResult};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp, format_timestamp, parse_timestamp, truncate_to_millis};
