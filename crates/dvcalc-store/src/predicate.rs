//! Single-column predicates over data points
//!
//! A `Predicate` is the one definition of a filter. The calculator evaluates
//! it in memory with [`Predicate::matches`], hands the same value to a store
//! through `DataValueStore::select_matching`, and database-backed stores
//! render it with [`Predicate::to_where_clause`]. Keeping all three derived
//! from one value means the cached and the queried path cannot disagree.

use dvcalc_types::{DataPoint, Timestamp, format_timestamp, truncate_to_millis};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::where_clause::WhereClauseBuilder;

/// Columns of the data value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    DataElement,
    Period,
    OrganisationUnit,
    CategoryOptionCombo,
    AttributeOptionCombo,
    Value,
    Created,
}

impl Column {
    /// Column name as stored in the table
    pub fn name(&self) -> &'static str {
        match self {
            Self::DataElement => "dataElement",
            Self::Period => "period",
            Self::OrganisationUnit => "organisationUnit",
            Self::CategoryOptionCombo => "categoryOptionCombo",
            Self::AttributeOptionCombo => "attributeOptionCombo",
            Self::Value => "value",
            Self::Created => "created",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison applied between a column and the operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    GreaterThan,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
        }
    }
}

/// A condition on exactly one column of a data point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "column", content = "operand", rename_all = "camelCase")]
pub enum Predicate {
    /// `dataElement = id`
    DataElement(String),
    /// `period = id`
    Period(String),
    /// `organisationUnit = id`
    OrganisationUnit(String),
    /// `categoryOptionCombo = id`
    CategoryOptionCombo(String),
    /// `attributeOptionCombo = id`
    AttributeOptionCombo(String),
    /// `created > timestamp` (strictly after)
    CreatedAfter(#[serde(with = "dvcalc_types::timestamp::canonical")] Timestamp),
}

impl Predicate {
    pub fn data_element(id: impl Into<String>) -> Self {
        Self::DataElement(id.into())
    }

    pub fn period(id: impl Into<String>) -> Self {
        Self::Period(id.into())
    }

    pub fn organisation_unit(id: impl Into<String>) -> Self {
        Self::OrganisationUnit(id.into())
    }

    pub fn category_option_combo(id: impl Into<String>) -> Self {
        Self::CategoryOptionCombo(id.into())
    }

    pub fn attribute_option_combo(id: impl Into<String>) -> Self {
        Self::AttributeOptionCombo(id.into())
    }

    /// Timestamps are kept at millisecond precision, the precision stores
    /// write and where clauses render.
    pub fn created_after(ts: Timestamp) -> Self {
        Self::CreatedAfter(truncate_to_millis(ts))
    }

    /// The column this predicate constrains
    pub fn column(&self) -> Column {
        match self {
            Self::DataElement(_) => Column::DataElement,
            Self::Period(_) => Column::Period,
            Self::OrganisationUnit(_) => Column::OrganisationUnit,
            Self::CategoryOptionCombo(_) => Column::CategoryOptionCombo,
            Self::AttributeOptionCombo(_) => Column::AttributeOptionCombo,
            Self::CreatedAfter(_) => Column::Created,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Self::CreatedAfter(_) => Operator::GreaterThan,
            _ => Operator::Equal,
        }
    }

    /// Operand as text; timestamps use the canonical layout so that textual
    /// comparison in a database orders the same way as `matches`.
    pub fn operand(&self) -> String {
        match self {
            Self::DataElement(id)
            | Self::Period(id)
            | Self::OrganisationUnit(id)
            | Self::CategoryOptionCombo(id)
            | Self::AttributeOptionCombo(id) => id.clone(),
            Self::CreatedAfter(ts) => format_timestamp(ts),
        }
    }

    /// Evaluate the predicate against a data point
    pub fn matches(&self, point: &DataPoint) -> bool {
        match self {
            Self::DataElement(id) => point.data_element() == id,
            Self::Period(id) => point.period() == id,
            Self::OrganisationUnit(id) => point.organisation_unit() == Some(id.as_str()),
            Self::CategoryOptionCombo(id) => point.category_option_combo() == id,
            Self::AttributeOptionCombo(id) => point.attribute_option_combo() == Some(id.as_str()),
            Self::CreatedAfter(ts) => truncate_to_millis(point.created()) > *ts,
        }
    }

    /// Keep the points that satisfy this predicate, preserving their order
    pub fn filter<'a, I>(&self, points: I) -> Vec<DataPoint>
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        points.into_iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Render as a SQL where clause
    pub fn to_where_clause(&self) -> String {
        WhereClauseBuilder::new().append_predicate(self).build()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_where_clause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvcalc_types::parse_timestamp;

    fn point() -> DataPoint {
        DataPoint::new("DE1", "202101", "COC1", "5", parse_timestamp("2021-02-01T10:00:00").unwrap())
            .with_organisation_unit("OU1")
    }

    #[test]
    fn test_equality_predicates() {
        let p = point();
        assert!(Predicate::data_element("DE1").matches(&p));
        assert!(!Predicate::data_element("DE2").matches(&p));
        assert!(Predicate::period("202101").matches(&p));
        assert!(Predicate::category_option_combo("COC1").matches(&p));
        assert!(Predicate::organisation_unit("OU1").matches(&p));
        assert!(!Predicate::attribute_option_combo("AOC1").matches(&p));
    }

    #[test]
    fn test_created_after_is_strict() {
        let p = point();
        let same = parse_timestamp("2021-02-01T10:00:00").unwrap();
        let before = parse_timestamp("2021-02-01T09:59:59").unwrap();
        assert!(!Predicate::created_after(same).matches(&p));
        assert!(Predicate::created_after(before).matches(&p));
    }

    #[test]
    fn test_column_and_operator() {
        let ts = parse_timestamp("2021-01-01").unwrap();
        assert_eq!(Predicate::period("P").column(), Column::Period);
        assert_eq!(Predicate::period("P").operator(), Operator::Equal);
        assert_eq!(Predicate::created_after(ts).column(), Column::Created);
        assert_eq!(Predicate::created_after(ts).operator(), Operator::GreaterThan);
        assert_eq!(Predicate::created_after(ts).operand(), "2021-01-01T00:00:00.000");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Predicate::period("202101")).unwrap();
        assert_eq!(json, serde_json::json!({"column": "period", "operand": "202101"}));

        let created = Predicate::created_after(parse_timestamp("2021-02-01").unwrap());
        let json = serde_json::to_string(&created).unwrap();
        assert_eq!(json, r#"{"column":"createdAfter","operand":"2021-02-01T00:00:00.000"}"#);
        assert_eq!(serde_json::from_str::<Predicate>(&json).unwrap(), created);
    }
}
