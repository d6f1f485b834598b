//! Reducers for a working set
//!
//! Reduction happens in two steps. Every value is parsed first; if any value
//! is not a number the whole aggregate is rejected, so a partial sum is never
//! produced. The parsed numbers are then handed to the reducer for the
//! selected kind.

use dvcalc_store::StoreResult;
use dvcalc_types::{AggregationKind, DataPoint};
use std::cmp::Ordering;

use crate::error::{EvalError, EvalResult};

/// Parse every value of the working set, failing on the first non-number
pub fn parse_values(points: &[DataPoint]) -> EvalResult<Vec<f64>> {
    points
        .iter()
        .map(|point| point.numeric_value().ok_or_else(|| EvalError::unparseable(point)))
        .collect()
}

/// Reduce a working set, reporting empty and malformed input as errors
pub fn reduce(kind: AggregationKind, points: &[DataPoint]) -> EvalResult<f64> {
    if points.is_empty() {
        return Err(EvalError::NoData);
    }

    let values = parse_values(points)?;

    let result = match kind {
        AggregationKind::Sum => sum(&values),
        AggregationKind::Average => average(&values),
        AggregationKind::Max => max(&values).unwrap_or(0.0),
        AggregationKind::Min => min(&values).unwrap_or(0.0),
    };

    log::trace!("{} over {} values = {}", kind, values.len(), result);
    Ok(result)
}

/// Collapse empty and malformed input to `0.0`; store failures pass through
pub fn or_zero(result: EvalResult<f64>) -> StoreResult<f64> {
    match result {
        Ok(value) => Ok(value),
        Err(EvalError::Store(err)) => Err(err),
        Err(err) => {
            log::debug!("Evaluation collapsed to 0.0: {}", err);
            Ok(0.0)
        }
    }
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sum divided by the number of values; an empty slice divides by one.
pub fn average(values: &[f64]) -> f64 {
    let count = values.len().max(1);
    sum(values) / count as f64
}

/// Greatest value under `f64::total_cmp`, so `NaN` ranks above infinity.
/// The first one wins a tie.
pub fn max(values: &[f64]) -> Option<f64> {
    extreme(values, Ordering::Greater)
}

/// Least value under `f64::total_cmp`. The first one wins a tie.
pub fn min(values: &[f64]) -> Option<f64> {
    extreme(values, Ordering::Less)
}

fn extreme(values: &[f64], wins: Ordering) -> Option<f64> {
    values
        .iter()
        .copied()
        .reduce(|best, v| if v.total_cmp(&best) == wins { v } else { best })
}
