//! The fluent filter-and-aggregate calculator

use dvcalc_store::{DataValueStore, Predicate, StoreResult};
use dvcalc_types::{AggregationKind, DataPoint, Timestamp};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::aggregate;
use crate::config::{CalculatorConfig, PeriodFallback};
use crate::error::EvalResult;

/// Data points currently held by a calculator
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkingSet {
    /// No filter has run since the last reset
    #[default]
    Unloaded,
    /// Result of the filters applied so far
    Loaded(Vec<DataPoint>),
}

impl WorkingSet {
    pub fn points(&self) -> Option<&[DataPoint]> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(points) => Some(points),
        }
    }
}

/// Session state, reset by `clear` and by every evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub working_set: WorkingSet,
    pub aggregation_kind: AggregationKind,
    /// Predicates the loaded working set reflects, in call order
    pub applied: SmallVec<[Predicate; 4]>,
}

impl CalculatorState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Filters data points from a store and reduces them to a single number.
///
/// The first filter of a session queries the store; later filters narrow the
/// cached working set in memory. `evaluate` reduces the working set (scanning
/// the whole store if no filter ran) and resets the session.
///
/// A calculator is one caller's session. Every state-changing method takes
/// `&mut self` and nothing is synchronized internally; consumers that need
/// independent filter chains each own a calculator. The store behind the
/// `Arc` may be shared freely.
pub struct DataValueCalculator {
    store: Arc<dyn DataValueStore>,
    config: CalculatorConfig,
    state: CalculatorState,
}

impl DataValueCalculator {
    /// Create a calculator with the default configuration
    pub fn new(store: Arc<dyn DataValueStore>) -> Self {
        Self::with_config(store, CalculatorConfig::default())
    }

    pub fn with_config(store: Arc<dyn DataValueStore>, config: CalculatorConfig) -> Self {
        Self {
            store,
            config,
            state: CalculatorState::default(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The cached working set, `None` while unloaded
    pub fn working_set(&self) -> Option<&[DataPoint]> {
        self.state.working_set.points()
    }

    pub fn aggregation_kind(&self) -> AggregationKind {
        self.state.aggregation_kind
    }

    /// Predicates the current working set reflects
    pub fn applied_filters(&self) -> &[Predicate] {
        &self.state.applied
    }

    /// Keep data points of this data element
    pub fn with_data_element(&mut self, data_element: &str) -> StoreResult<&mut Self> {
        self.apply(Predicate::data_element(data_element))
    }

    /// Keep data points of this period.
    ///
    /// Under `PeriodFallback::Requery`, an empty narrowing of a loaded working
    /// set is replaced by a fresh store query for the period alone.
    pub fn with_period(&mut self, period: &str) -> StoreResult<&mut Self> {
        self.apply(Predicate::period(period))
    }

    /// Keep data points of this category option combo
    pub fn with_category_option_combo(&mut self, category_option_combo: &str) -> StoreResult<&mut Self> {
        self.apply(Predicate::category_option_combo(category_option_combo))
    }

    /// Keep data points created strictly after `created`
    pub fn with_created_after(&mut self, created: Timestamp) -> StoreResult<&mut Self> {
        self.apply(Predicate::created_after(created))
    }

    /// Keep data points of this organisation unit
    pub fn with_organisation_unit(&mut self, organisation_unit: &str) -> StoreResult<&mut Self> {
        self.apply(Predicate::organisation_unit(organisation_unit))
    }

    /// Keep data points of this attribute option combo
    pub fn with_attribute_option_combo(&mut self, attribute_option_combo: &str) -> StoreResult<&mut Self> {
        self.apply(Predicate::attribute_option_combo(attribute_option_combo))
    }

    /// Select the reducer. Aggregation types without a reducer of their own
    /// select `Sum`.
    pub fn with_aggregation_type(&mut self, kind: impl Into<AggregationKind>) -> &mut Self {
        self.state.aggregation_kind = kind.into();
        self
    }

    /// Apply any predicate.
    ///
    /// On a store failure the session is left exactly as it was.
    pub fn apply(&mut self, predicate: Predicate) -> StoreResult<&mut Self> {
        let (points, requeried) = match &self.state.working_set {
            WorkingSet::Unloaded => {
                log::debug!("Working set unloaded, querying store: {}", predicate);
                (self.store.select_matching(&predicate)?, false)
            }
            WorkingSet::Loaded(cached) => {
                let narrowed = predicate.filter(cached);
                if narrowed.is_empty() && self.requeries_when_empty(&predicate) {
                    log::debug!("Narrowing by {} left nothing, querying store for it alone", predicate);
                    (self.store.select_matching(&predicate)?, true)
                } else {
                    log::debug!("Narrowed {} -> {} by {}", cached.len(), narrowed.len(), predicate);
                    (narrowed, false)
                }
            }
        };

        if requeried {
            self.state.applied.clear();
        }
        log::trace!("Working set now holds {} data points", points.len());
        self.state.working_set = WorkingSet::Loaded(points);
        self.state.applied.push(predicate);
        Ok(self)
    }

    fn requeries_when_empty(&self, predicate: &Predicate) -> bool {
        matches!(predicate, Predicate::Period(_)) && self.config.period_fallback == PeriodFallback::Requery
    }

    /// Reduce the working set with the selected aggregation kind.
    ///
    /// Returns `0.0` when nothing matched or any value is not a number. The
    /// session is reset whatever the outcome, including a store failure.
    pub fn evaluate(&mut self) -> StoreResult<f64> {
        aggregate::or_zero(self.try_evaluate())
    }

    /// Like `evaluate`, but reports an empty working set as
    /// `EvalError::NoData` and a malformed value as
    /// `EvalError::UnparseableValue`.
    pub fn try_evaluate(&mut self) -> EvalResult<f64> {
        let state = std::mem::take(&mut self.state);

        let points = match state.working_set {
            WorkingSet::Loaded(points) => points,
            WorkingSet::Unloaded => {
                log::debug!("No filters applied, scanning the whole store");
                self.store.select_all()?
            }
        };

        aggregate::reduce(state.aggregation_kind, &points)
    }

    /// Drop the working set and restore the default aggregation kind
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }
}

impl fmt::Debug for DataValueCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataValueCalculator")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvcalc_store::NoOpStore;

    #[test]
    fn test_new_calculator_is_empty() {
        let calculator = DataValueCalculator::new(Arc::new(NoOpStore::new()));
        assert!(calculator.state().is_empty());
        assert!(calculator.working_set().is_none());
        assert_eq!(calculator.aggregation_kind(), AggregationKind::Sum);
    }

    #[test]
    fn test_filter_on_empty_store_loads_empty_set() {
        let mut calculator = DataValueCalculator::new(Arc::new(NoOpStore::new()));
        calculator.with_data_element("DE1").unwrap();
        assert_eq!(calculator.working_set(), Some(&[][..]));
        assert_eq!(calculator.applied_filters(), &[Predicate::data_element("DE1")]);
    }

    #[test]
    fn test_clear_resets_kind() {
        let mut calculator = DataValueCalculator::new(Arc::new(NoOpStore::new()));
        calculator.with_aggregation_type(AggregationKind::Max);
        calculator.clear();
        assert!(calculator.state().is_empty());
    }
}
