//! Where command implementation

use super::{filter, output};
use anyhow::Result;
use dvcalc_store::WhereClauseBuilder;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for where command
pub struct ClauseConfig {
    pub filters: Vec<String>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print the store query each filter issues, and their conjunction
pub fn render(config: ClauseConfig) -> Result<()> {
    let predicates = filter::parse_filters(&config.filters)?;

    let conjunction = predicates
        .iter()
        .fold(WhereClauseBuilder::new(), |builder, predicate| builder.append_predicate(predicate))
        .build();

    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    let content = match format {
        output::OutputFormat::Table => conjunction,
        _ => {
            let clauses: Vec<String> = predicates.iter().map(|p| p.to_where_clause()).collect();
            output::format_json(
                &json!({ "clauses": clauses, "conjunction": conjunction }),
                format == output::OutputFormat::JsonPretty,
            )?
        }
    };

    output::write_output(&content, config.output_file.as_deref())
}
