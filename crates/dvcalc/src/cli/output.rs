//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use dvcalc_types::{DataPoint, format_timestamp};
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    /// Parse a format name; unknown names select pretty JSON
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "json-pretty" => Self::JsonPretty,
            "table" => Self::Table,
            _ => Self::JsonPretty,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display, including its causes
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        writeln!(file).with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        log::info!("Output written to {}", path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

#[derive(Tabled)]
struct KeyValue {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a JSON object as a two-column table
pub fn format_as_table(value: &Value) -> Option<String> {
    let Value::Object(obj) = value else {
        return None;
    };

    let rows: Vec<KeyValue> = obj
        .iter()
        .map(|(k, v)| KeyValue {
            key: k.clone(),
            value: format_value(v),
        })
        .collect();

    Some(Table::new(rows).with(Style::modern()).to_string())
}

#[derive(Tabled)]
struct DataPointRow {
    #[tabled(rename = "Data element")]
    data_element: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Org unit")]
    organisation_unit: String,
    #[tabled(rename = "Category option combo")]
    category_option_combo: String,
    #[tabled(rename = "Attribute option combo")]
    attribute_option_combo: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&DataPoint> for DataPointRow {
    fn from(point: &DataPoint) -> Self {
        Self {
            data_element: point.data_element().to_string(),
            period: point.period().to_string(),
            organisation_unit: point.organisation_unit().unwrap_or("-").to_string(),
            category_option_combo: point.category_option_combo().to_string(),
            attribute_option_combo: point.attribute_option_combo().unwrap_or("-").to_string(),
            value: point.value().to_string(),
            created: format_timestamp(&point.created()),
        }
    }
}

/// Format data points as a table, one row per point
pub fn format_points_table(points: &[DataPoint]) -> String {
    if points.is_empty() {
        return "(no data points)".to_string();
    }
    let rows: Vec<DataPointRow> = points.iter().map(DataPointRow::from).collect();
    Table::new(rows).with(Style::modern()).to_string()
}

/// Format a simple value for display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join("\n"),
        Value::Object(obj) => format!("{{}} with {} fields", obj.len()),
    }
}

/// Print output in the specified format
pub fn print_output(value: &Value, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let content = match format {
        OutputFormat::Json => format_json(value, false)?,
        OutputFormat::JsonPretty => format_json(value, true)?,
        OutputFormat::Table => match format_as_table(value) {
            Some(table) => table,
            None => format_json(value, true)?,
        },
    };

    write_output(&content, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::JsonPretty);
    }

    #[test]
    fn test_table_lists_keys() {
        let table = format_as_table(&json!({"aggregation": "SUM", "result": 6.0})).unwrap();
        assert!(table.contains("aggregation"));
        assert!(table.contains("SUM"));
        assert!(table.contains("6.0"));
    }

    #[test]
    fn test_table_requires_object() {
        assert!(format_as_table(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_empty_points_table() {
        assert_eq!(format_points_table(&[]), "(no data points)");
    }
}
