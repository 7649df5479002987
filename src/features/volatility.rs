//! Volatility scoring based on the coefficient of variation.

use crate::error::{ForecastError, Result};
use crate::utils::stats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative dispersion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl VolatilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityLevel::Low => "low",
            VolatilityLevel::Medium => "medium",
            VolatilityLevel::High => "high",
        }
    }
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket boundaries for the coefficient of variation.
///
/// `cv < low_upper` is low, `low_upper <= cv <= medium_upper` is medium,
/// anything above is high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityThresholds {
    low_upper: f64,
    medium_upper: f64,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            low_upper: 0.10,
            medium_upper: 0.30,
        }
    }
}

impl VolatilityThresholds {
    /// Create thresholds, rejecting negative or non-monotonic bounds.
    pub fn new(low_upper: f64, medium_upper: f64) -> Result<Self> {
        if !(low_upper.is_finite() && medium_upper.is_finite()) {
            return Err(ForecastError::InvalidParameter(
                "volatility thresholds must be finite".to_string(),
            ));
        }
        if low_upper < 0.0 || medium_upper < low_upper {
            return Err(ForecastError::InvalidParameter(format!(
                "volatility thresholds must satisfy 0 <= low ({}) <= medium ({})",
                low_upper, medium_upper
            )));
        }
        Ok(Self {
            low_upper,
            medium_upper,
        })
    }

    pub fn low_upper(&self) -> f64 {
        self.low_upper
    }

    pub fn medium_upper(&self) -> f64 {
        self.medium_upper
    }

    /// Bucket a coefficient of variation.
    pub fn classify(&self, cv: f64) -> VolatilityLevel {
        if cv < self.low_upper {
            VolatilityLevel::Low
        } else if cv <= self.medium_upper {
            VolatilityLevel::Medium
        } else {
            VolatilityLevel::High
        }
    }
}

/// Volatility of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityScore {
    pub level: VolatilityLevel,
    /// Coefficient of variation, always >= 0.
    pub value: f64,
}

/// Population standard deviation over mean absolute value.
///
/// Falls back to the raw standard deviation when every value is zero-scaled.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let std = stats::population_std_dev(values);
    let scale = stats::mean_abs(values);
    let cv = if scale == 0.0 { std } else { std / scale };
    if cv.is_finite() {
        cv
    } else {
        f64::MAX
    }
}

/// Score the volatility of `values` against `thresholds`.
pub fn score_volatility(values: &[f64], thresholds: &VolatilityThresholds) -> VolatilityScore {
    let value = coefficient_of_variation(values);
    VolatilityScore {
        level: thresholds.classify(value),
        value,
    }
}
