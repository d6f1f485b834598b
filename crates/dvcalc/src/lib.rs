//! Data value calculator
//!
//! Filters aggregate data values (data element, period, category option
//! combo, ...) held by a store and reduces them to a single number with SUM,
//! AVERAGE, MAX or MIN.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dvcalc::{AggregationKind, DataPoint, DataValueCalculator, InMemoryStore, parse_timestamp};
//!
//! let created = parse_timestamp("2021-02-01")?;
//! let store = InMemoryStore::from_points(vec![
//!     DataPoint::new("DE1", "202101", "COC1", "4", created),
//!     DataPoint::new("DE1", "202101", "COC2", "9", created),
//! ]);
//!
//! let mut calculator = DataValueCalculator::new(Arc::new(store));
//! let max = calculator
//!     .with_period("202101")?
//!     .with_aggregation_type(AggregationKind::Max)
//!     .evaluate()?;
//! assert_eq!(max, 9.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all public APIs from internal crates
pub use dvcalc_eval as eval;
pub use dvcalc_store as store;
pub use dvcalc_types as types;

// Convenience re-exports
pub use dvcalc_eval::{CalculatorConfig, DataValueCalculator, EvalError, EvalResult, PeriodFallback};
pub use dvcalc_store::{DataValueStore, InMemoryStore, Predicate, StoreError, StoreResult};
pub use dvcalc_types::{AggregationKind, AggregationType, DataPoint, Timestamp, parse_timestamp};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
