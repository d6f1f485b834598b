//! Calculator configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;

/// What `with_period` does when narrowing a loaded working set leaves nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodFallback {
    /// Discard the empty result and query the store for the period alone.
    /// Earlier filters no longer apply to the new working set.
    #[default]
    Requery,
    /// Keep the empty result, like every other filter does
    Strict,
}

impl PeriodFallback {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Requery => "requery",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for PeriodFallback {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requery" => Ok(Self::Requery),
            "strict" => Ok(Self::Strict),
            _ => Err(EvalError::invalid_config(CalculatorConfig::PERIOD_FALLBACK_ENV, s)),
        }
    }
}

impl fmt::Display for PeriodFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a `DataValueCalculator`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Policy for an empty period narrowing
    pub period_fallback: PeriodFallback,
}

impl CalculatorConfig {
    pub const PERIOD_FALLBACK_ENV: &'static str = "DVCALC_PERIOD_FALLBACK";

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `DVCALC_PERIOD_FALLBACK`: `requery` or `strict` (default: requery)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Missing or
    /// unrecognized values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let period_fallback = lookup(Self::PERIOD_FALLBACK_ENV)
            .and_then(|raw| match raw.parse() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    log::warn!("{}, using default", err);
                    None
                }
            })
            .unwrap_or_default();

        Self { period_fallback }
    }

    pub fn with_period_fallback(mut self, period_fallback: PeriodFallback) -> Self {
        self.period_fallback = period_fallback;
        self
    }
}
