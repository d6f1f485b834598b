//! Filter arguments (`key=value`)

use anyhow::{Context, Result};
use dvcalc_eval::{CalculatorConfig, DataValueCalculator, PeriodFallback};
use dvcalc_store::{InMemoryStore, Predicate};
use dvcalc_types::parse_timestamp;
use std::path::Path;
use std::sync::Arc;

/// Accepted filter keys, for help and error messages
pub const FILTER_KEYS: &str =
    "data-element, period, category-option-combo, organisation-unit, attribute-option-combo, created-after";

/// Parse one `key=value` filter into a predicate
pub fn parse_filter(filter: &str) -> Result<Predicate> {
    let Some((key, value)) = filter.split_once('=') else {
        anyhow::bail!("Invalid filter format: '{}'. Expected 'key=value'", filter);
    };

    let key = key.trim();
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("Filter '{}' has an empty value", key);
    }

    let predicate = match key.to_ascii_lowercase().as_str() {
        "data-element" | "de" => Predicate::data_element(value),
        "period" | "pe" => Predicate::period(value),
        "category-option-combo" | "coc" => Predicate::category_option_combo(value),
        "organisation-unit" | "ou" => Predicate::organisation_unit(value),
        "attribute-option-combo" | "aoc" => Predicate::attribute_option_combo(value),
        "created-after" => Predicate::created_after(
            parse_timestamp(value).with_context(|| format!("Invalid created-after filter '{}'", value))?,
        ),
        other => anyhow::bail!("Unknown filter key '{}'. Expected one of: {}", other, FILTER_KEYS),
    };

    Ok(predicate)
}

/// Parse every filter, keeping command-line order
pub fn parse_filters(filters: &[String]) -> Result<Vec<Predicate>> {
    filters.iter().map(|f| parse_filter(f)).collect()
}

/// Resolve the calculator configuration: environment first, flags override
pub fn calculator_config(strict_period: bool) -> CalculatorConfig {
    let config = CalculatorConfig::from_env();
    if strict_period {
        config.with_period_fallback(PeriodFallback::Strict)
    } else {
        config
    }
}

/// Load the store file and apply the filters in order
pub fn filtered_calculator(
    data: &Path,
    predicates: &[Predicate],
    config: CalculatorConfig,
) -> Result<DataValueCalculator> {
    let store = InMemoryStore::from_json_file(data)
        .with_context(|| format!("Failed to load data file: {}", data.display()))?;

    let mut calculator = DataValueCalculator::with_config(Arc::new(store), config);
    for predicate in predicates {
        calculator
            .apply(predicate.clone())
            .with_context(|| format!("Failed to apply filter {}", predicate))?;
    }

    Ok(calculator)
}
