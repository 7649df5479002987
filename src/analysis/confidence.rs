//! Qualitative confidence of a forecast.

use crate::features::VolatilityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Certainty label attached to a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds for the confidence classifier.
///
/// - `low` when `n < low_below` or volatility is high;
/// - `high` when `n >= high_from`, `fit_quality >= min_fit_quality` and the
///   regression strategy produced the forecast;
/// - `medium` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidencePolicy {
    pub low_below: usize,
    pub high_from: usize,
    pub min_fit_quality: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            low_below: 4,
            high_from: 6,
            min_fit_quality: 0.80,
        }
    }
}

impl ConfidencePolicy {
    pub fn with_min_fit_quality(mut self, min: f64) -> Self {
        self.min_fit_quality = min.clamp(0.0, 1.0);
        self
    }

    /// Classify a forecast. Total over all inputs; NaN fit quality counts as 0.
    pub fn classify(
        &self,
        n: usize,
        fit_quality: f64,
        volatility: VolatilityLevel,
        fallback_used: bool,
    ) -> ConfidenceLevel {
        if n < self.low_below || volatility == VolatilityLevel::High {
            return ConfidenceLevel::Low;
        }

        let fit_quality = if fit_quality.is_nan() { 0.0 } else { fit_quality };
        if n >= self.high_from && fit_quality >= self.min_fit_quality && !fallback_used {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_pinned() {
        let policy = ConfidencePolicy::default();
        assert_eq!(policy.low_below, 4);
        assert_eq!(policy.high_from, 6);
        assert_eq!(policy.min_fit_quality, 0.80);
    }

    #[test]
    fn short_history_is_always_low() {
        let policy = ConfidencePolicy::default();
        for n in 0..4 {
            assert_eq!(
                policy.classify(n, 1.0, VolatilityLevel::Low, false),
                ConfidenceLevel::Low
            );
        }
    }

    #[test]
    fn high_volatility_is_always_low() {
        let policy = ConfidencePolicy::default();
        assert_eq!(
            policy.classify(50, 0.99, VolatilityLevel::High, false),
            ConfidenceLevel::Low
        );
    }

    #[test]
    fn long_well_fitted_history_is_high() {
        let policy = ConfidencePolicy::default();
        assert_eq!(
            policy.classify(6, 0.80, VolatilityLevel::Medium, false),
            ConfidenceLevel::High
        );
        assert_eq!(
            policy.classify(6, 0.79, VolatilityLevel::Low, false),
            ConfidenceLevel::Medium
        );
        assert_eq!(
            policy.classify(5, 0.99, VolatilityLevel::Low, false),
            ConfidenceLevel::Medium
        );
    }

    #[test]
    fn fallback_caps_confidence_at_medium() {
        let policy = ConfidencePolicy::default();
        assert_eq!(
            policy.classify(12, 0.99, VolatilityLevel::Low, true),
            ConfidenceLevel::Medium
        );
    }

    #[test]
    fn nan_fit_quality_is_treated_as_zero() {
        let policy = ConfidencePolicy::default();
        assert_eq!(
            policy.classify(10, f64::NAN, VolatilityLevel::Low, false),
            ConfidenceLevel::Medium
        );
    }

    #[test]
    fn spellings_match_wire_format() {
        assert_eq!(ConfidenceLevel::High.to_string(), "high");
        assert_eq!(
            serde_json::to_string(&ConfidenceLevel::Medium).unwrap(),
            "\"medium\""
        );
    }
}
