//! Trend estimation for metric series.
//!
//! Fits a least-squares line against the observation index and classifies
//! its slope relative to the scale of the series.

use crate::utils::{fit_line, stats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-run direction of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for trend classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendConfig {
    /// Slopes within `±relative_threshold * mean(|y|)` are labeled stable.
    pub relative_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            relative_threshold: 0.01,
        }
    }
}

impl TrendConfig {
    /// Set the relative stability band.
    pub fn with_relative_threshold(mut self, threshold: f64) -> Self {
        self.relative_threshold = threshold.max(0.0);
        self
    }
}

/// Fitted trend of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendEstimate {
    pub direction: TrendDirection,
    /// Change per period of the fitted line.
    pub slope: f64,
    /// Fitted value at the first observation.
    pub intercept: f64,
    /// R² of the fit, in [0, 1].
    pub fit_quality: f64,
    /// Two-sided p-value of the slope.
    pub p_value: f64,
}

impl TrendEstimate {
    /// Trend of a series with no usable slope: flat through `level`.
    pub fn flat(level: f64) -> Self {
        Self {
            direction: TrendDirection::Stable,
            slope: 0.0,
            intercept: level,
            fit_quality: 0.0,
            p_value: 1.0,
        }
    }

    /// Fitted line value `t` periods after the first observation.
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Estimate the trend of `values`.
///
/// A strictly monotonic series always takes the direction of its slope;
/// otherwise slopes inside the stability band are `Stable`. Series shorter
/// than two points, and series whose fit cannot be computed, are flat.
pub fn estimate_trend(values: &[f64], config: &TrendConfig) -> TrendEstimate {
    let level = values.last().copied().unwrap_or(0.0);
    let fit = match fit_line(values) {
        Ok(fit) => fit,
        Err(_) => return TrendEstimate::flat(level),
    };

    let band = config.relative_threshold * stats::mean_abs(values);
    let direction = match stats::strict_monotonic_direction(values) {
        Some(true) => TrendDirection::Increasing,
        Some(false) => TrendDirection::Decreasing,
        None if fit.slope > band => TrendDirection::Increasing,
        None if fit.slope < -band => TrendDirection::Decreasing,
        None => TrendDirection::Stable,
    };

    TrendEstimate {
        direction,
        slope: fit.slope,
        intercept: fit.intercept,
        fit_quality: fit.r_squared,
        p_value: fit.p_value,
    }
}
