//! Aggregation selectors
//!
//! `AggregationType` is the open vocabulary a caller may hand in (every
//! aggregation type a data element can declare). `AggregationKind` is the
//! closed set of reducers the calculator actually implements. Any type
//! without a reducer of its own normalizes to `Sum`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Aggregation type as declared on a data element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    Sum,
    Average,
    AverageSumOrgUnit,
    Last,
    LastAverageOrgUnit,
    Count,
    Stddev,
    Variance,
    Min,
    Max,
    None,
    Custom,
    Default,
    /// Any name this crate does not know
    #[serde(other)]
    Unknown,
}

impl AggregationType {
    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Average => "AVERAGE",
            Self::AverageSumOrgUnit => "AVERAGE_SUM_ORG_UNIT",
            Self::Last => "LAST",
            Self::LastAverageOrgUnit => "LAST_AVERAGE_ORG_UNIT",
            Self::Count => "COUNT",
            Self::Stddev => "STDDEV",
            Self::Variance => "VARIANCE",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::None => "NONE",
            Self::Custom => "CUSTOM",
            Self::Default => "DEFAULT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for AggregationType {
    type Err = Infallible;

    /// Case-insensitive; `-` and `_` are interchangeable. Never fails:
    /// unrecognized names become `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Ok(match normalized.as_str() {
            "SUM" => Self::Sum,
            "AVERAGE" => Self::Average,
            "AVERAGE_SUM_ORG_UNIT" => Self::AverageSumOrgUnit,
            "LAST" => Self::Last,
            "LAST_AVERAGE_ORG_UNIT" => Self::LastAverageOrgUnit,
            "COUNT" => Self::Count,
            "STDDEV" => Self::Stddev,
            "VARIANCE" => Self::Variance,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "NONE" => Self::None,
            "CUSTOM" => Self::Custom,
            "DEFAULT" => Self::Default,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reducer applied by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationKind {
    #[default]
    Sum,
    Average,
    Max,
    Min,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 4] = [Self::Sum, Self::Average, Self::Max, Self::Min];

    pub fn name(&self) -> &'static str {
        self.as_type().name()
    }

    pub fn as_type(&self) -> AggregationType {
        match self {
            Self::Sum => AggregationType::Sum,
            Self::Average => AggregationType::Average,
            Self::Max => AggregationType::Max,
            Self::Min => AggregationType::Min,
        }
    }
}

impl From<AggregationType> for AggregationKind {
    fn from(ty: AggregationType) -> Self {
        match ty {
            AggregationType::Average => Self::Average,
            AggregationType::Max => Self::Max,
            AggregationType::Min => Self::Min,
            _ => Self::Sum,
        }
    }
}

impl FromStr for AggregationKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty: AggregationType = s.parse()?;
        Ok(ty.into())
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_sum() {
        assert_eq!(AggregationKind::default(), AggregationKind::Sum);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("average".parse::<AggregationType>().unwrap(), AggregationType::Average);
        assert_eq!(
            "average-sum-org-unit".parse::<AggregationType>().unwrap(),
            AggregationType::AverageSumOrgUnit
        );
        assert_eq!("median".parse::<AggregationType>().unwrap(), AggregationType::Unknown);
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for kind in AggregationKind::ALL {
            assert_eq!(kind.name().parse::<AggregationKind>().unwrap(), kind);
        }
    }
}
