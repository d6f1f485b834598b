//! Data value calculator
//!
//! This crate evaluates data points held by a [`DataValueStore`] against a
//! chain of narrowing filters and reduces the survivors to one number.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dvcalc_eval::DataValueCalculator;
//! use dvcalc_store::InMemoryStore;
//! use dvcalc_types::{AggregationKind, DataPoint, parse_timestamp};
//!
//! let created = parse_timestamp("2021-02-01").unwrap();
//! let store = InMemoryStore::from_points(vec![
//!     DataPoint::new("DE1", "202101", "COC1", "10", created),
//!     DataPoint::new("DE1", "202102", "COC1", "30", created),
//!     DataPoint::new("DE2", "202101", "COC1", "99", created),
//! ]);
//!
//! let mut calculator = DataValueCalculator::new(Arc::new(store));
//! let average = calculator
//!     .with_data_element("DE1")?
//!     .with_aggregation_type(AggregationKind::Average)
//!     .evaluate()?;
//! assert_eq!(average, 20.0);
//! # Ok::<(), dvcalc_store::StoreError>(())
//! ```
//!
//! # Architecture
//!
//! - `DataValueCalculator`: the session object holding the working set and the
//!   selected aggregation kind
//! - `WorkingSet`: `Unloaded` until the first filter (or `evaluate`) runs
//! - `aggregate`: the reducers and their all-or-nothing parse policy
//! - `CalculatorConfig`: the period fallback policy
//!
//! # Failure semantics
//!
//! `evaluate` never reports bad data: an empty working set or any value that
//! is not a number yields `0.0`. `try_evaluate` runs the same reducers but
//! returns `EvalError::NoData` / `EvalError::UnparseableValue` instead.
//! Store failures are returned unchanged by both.
//!
//! [`DataValueStore`]: dvcalc_store::DataValueStore

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{CalculatorState, DataValueCalculator, WorkingSet};
pub use config::{CalculatorConfig, PeriodFallback};
pub use error::{EvalError, EvalResult};
