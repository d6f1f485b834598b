//! Evaluate command implementation

use super::{filter, output};
use anyhow::{Context, Result};
use dvcalc_eval::EvalError;
use dvcalc_types::{AggregationKind, AggregationType};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Configuration for evaluate command
pub struct EvaluateConfig {
    pub data: PathBuf,
    pub filters: Vec<String>,
    pub aggregation: Option<String>,
    pub strict_period: bool,
    /// Report empty or malformed working sets instead of printing 0
    pub strict: bool,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Evaluate the filters over a data file and print the result
pub fn evaluate(config: EvaluateConfig) -> Result<()> {
    let result = run(&config)?;

    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    output::print_output(&result, format, config.output_file.as_deref())
}

/// Run the evaluation and build the result document
pub fn run(config: &EvaluateConfig) -> Result<Value> {
    let predicates = filter::parse_filters(&config.filters)?;
    let aggregation = resolve_aggregation(config.aggregation.as_deref());
    let calculator_config = filter::calculator_config(config.strict_period);
    let period_fallback = calculator_config.period_fallback;

    if config.verbose {
        eprintln!(
            "Evaluating {} over {} with {} filter(s)",
            aggregation,
            config.data.display(),
            predicates.len()
        );
    }

    let mut calculator = filter::filtered_calculator(&config.data, &predicates, calculator_config)?;
    // Filters after a period re-query no longer apply; report what the result reflects
    let applied: Vec<String> = calculator
        .applied_filters()
        .iter()
        .map(ToString::to_string)
        .collect();
    if applied.len() < predicates.len() {
        eprintln!(
            "{}",
            output::format_warning("Period filter matched nothing; the store was queried for the period alone")
        );
    }

    calculator.with_aggregation_type(aggregation);
    let result = if config.strict {
        calculator.try_evaluate().map_err(strict_error)?
    } else {
        calculator.evaluate().context("Evaluation failed")?
    };

    Ok(json!({
        "aggregation": aggregation.name(),
        "filters": applied,
        "periodFallback": period_fallback.name(),
        "result": result,
    }))
}

/// Map an aggregation name onto its reducer. Unknown names and types
/// without a reducer of their own select SUM.
fn resolve_aggregation(name: Option<&str>) -> AggregationKind {
    let Some(name) = name else {
        return AggregationKind::default();
    };

    let aggregation_type: AggregationType = name.parse().unwrap_or(AggregationType::Unknown);
    let kind = AggregationKind::from(aggregation_type);
    if kind.as_type() != aggregation_type {
        log::warn!("Aggregation '{}' has no reducer of its own, using {}", name, kind);
    }
    kind
}

fn strict_error(err: EvalError) -> anyhow::Error {
    match err {
        EvalError::NoData => anyhow::anyhow!("No data points matched the filters"),
        other => anyhow::Error::new(other).context("Evaluation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aggregation() {
        assert_eq!(resolve_aggregation(None), AggregationKind::Sum);
        assert_eq!(resolve_aggregation(Some("average")), AggregationKind::Average);
        assert_eq!(resolve_aggregation(Some("MAX")), AggregationKind::Max);
        assert_eq!(resolve_aggregation(Some("count")), AggregationKind::Sum);
        assert_eq!(resolve_aggregation(Some("median-ish")), AggregationKind::Sum);
    }
}
