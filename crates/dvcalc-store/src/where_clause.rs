//! SQL where clause rendering
//!
//! Database-backed stores translate a `Predicate` into SQL text. Values are
//! always emitted as quoted string literals with embedded quotes doubled.

use crate::predicate::{Operator, Predicate};

/// Builds a conjunction of single-column comparisons
#[derive(Debug, Clone, Default)]
pub struct WhereClauseBuilder {
    clauses: Vec<String>,
}

impl WhereClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column = 'value'`
    pub fn append_key_string_value(self, column: &str, value: impl AsRef<str>) -> Self {
        self.append_comparison(column, Operator::Equal, value.as_ref())
    }

    /// Append `column > 'value'`
    pub fn append_key_greater_than_string_value(self, column: &str, value: impl AsRef<str>) -> Self {
        self.append_comparison(column, Operator::GreaterThan, value.as_ref())
    }

    /// Append the comparison described by a predicate
    pub fn append_predicate(self, predicate: &Predicate) -> Self {
        self.append_comparison(predicate.column().name(), predicate.operator(), &predicate.operand())
    }

    fn append_comparison(mut self, column: &str, operator: Operator, value: &str) -> Self {
        self.clauses
            .push(format!("{} {} '{}'", column, operator.symbol(), escape(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the clause. An empty builder renders the always-true `1`.
    pub fn build(&self) -> String {
        if self.clauses.is_empty() {
            "1".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        let builder = WhereClauseBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), "1");
    }

    #[test]
    fn test_escape_quotes() {
        let clause = WhereClauseBuilder::new()
            .append_key_string_value("period", "O'Brien")
            .build();
        assert_eq!(clause, "period = 'O''Brien'");
    }
}
