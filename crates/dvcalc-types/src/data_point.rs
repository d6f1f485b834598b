//! Data points - the numeric facts a calculator filters and reduces

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timestamp::{Timestamp, format_timestamp};

/// One aggregate data value.
///
/// A data point is immutable once built: filtering produces new sequences of
/// points and never edits a stored record. The value is kept as text, exactly
/// as the store holds it; numeric interpretation happens at aggregation time
/// and may fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    data_element: String,
    period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organisation_unit: Option<String>,
    category_option_combo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute_option_combo: Option<String>,
    value: String,
    #[serde(with = "crate::timestamp::canonical")]
    created: Timestamp,
}

impl DataPoint {
    /// Create a data point from its mandatory dimensions
    pub fn new(
        data_element: impl Into<String>,
        period: impl Into<String>,
        category_option_combo: impl Into<String>,
        value: impl Into<String>,
        created: Timestamp,
    ) -> Self {
        Self {
            data_element: data_element.into(),
            period: period.into(),
            organisation_unit: None,
            category_option_combo: category_option_combo.into(),
            attribute_option_combo: None,
            value: value.into(),
            created,
        }
    }

    /// Set the organisation unit
    pub fn with_organisation_unit(mut self, organisation_unit: impl Into<String>) -> Self {
        self.organisation_unit = Some(organisation_unit.into());
        self
    }

    /// Set the attribute option combo
    pub fn with_attribute_option_combo(mut self, attribute_option_combo: impl Into<String>) -> Self {
        self.attribute_option_combo = Some(attribute_option_combo.into());
        self
    }

    pub fn data_element(&self) -> &str {
        &self.data_element
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn organisation_unit(&self) -> Option<&str> {
        self.organisation_unit.as_deref()
    }

    pub fn category_option_combo(&self) -> &str {
        &self.category_option_combo
    }

    pub fn attribute_option_combo(&self) -> Option<&str> {
        self.attribute_option_combo.as_deref()
    }

    /// The stored textual value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// Interpret the value as a number.
    ///
    /// Surrounding whitespace is ignored. Returns `None` when the text is not
    /// a floating-point literal.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }

    /// Identity of this point inside a keyed store
    pub fn key(&self) -> DataPointKey {
        DataPointKey {
            data_element: self.data_element.clone(),
            period: self.period.clone(),
            organisation_unit: self.organisation_unit.clone(),
            category_option_combo: self.category_option_combo.clone(),
            attribute_option_combo: self.attribute_option_combo.clone(),
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} = {} ({})",
            self.data_element,
            self.period,
            self.category_option_combo,
            self.value,
            format_timestamp(&self.created)
        )
    }
}

/// Unique key of a data point: every dimension except value and creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPointKey {
    pub data_element: String,
    pub period: String,
    pub organisation_unit: Option<String>,
    pub category_option_combo: String,
    pub attribute_option_combo: Option<String>,
}
