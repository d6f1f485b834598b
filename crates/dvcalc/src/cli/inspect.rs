//! Inspect command implementation

use super::{filter, output};
use anyhow::Result;
use dvcalc_store::Predicate;
use dvcalc_types::DataPoint;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Configuration for inspect command
pub struct InspectConfig {
    pub data: PathBuf,
    pub filters: Vec<String>,
    pub strict_period: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print the working set left by the filters
pub fn inspect(config: InspectConfig) -> Result<()> {
    let predicates = filter::parse_filters(&config.filters)?;
    let calculator = filter::filtered_calculator(
        &config.data,
        &predicates,
        filter::calculator_config(config.strict_period),
    )?;

    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    let points = calculator.working_set();

    if format == output::OutputFormat::Table {
        let table = match points {
            Some(points) => output::format_points_table(points),
            None => "(no filters applied)".to_string(),
        };
        return output::write_output(&table, config.output_file.as_deref());
    }

    let document = working_set_document(calculator.applied_filters(), points)?;
    output::print_output(&document, format, config.output_file.as_deref())
}

/// Describe a working set as JSON; `points` is `None` while unloaded
pub fn working_set_document(
    applied: &[Predicate],
    points: Option<&[DataPoint]>,
) -> Result<Value> {
    let filters: Vec<String> = applied.iter().map(ToString::to_string).collect();
    let document = match points {
        None => json!({ "loaded": false, "filters": filters }),
        Some(points) => json!({
            "loaded": true,
            "filters": filters,
            "count": points.len(),
            "dataValues": serde_json::to_value(points)?,
        }),
    };
    Ok(document)
}
