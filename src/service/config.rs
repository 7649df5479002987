//! Engine configuration shared by both services.

use crate::analysis::ConfidencePolicy;
use crate::detection::SeasonalityConfig;
use crate::features::{TrendConfig, VolatilityThresholds};
use crate::models::{DriftConfig, RegressionCapability};
use crate::validation::MAX_PERIODS_AHEAD;

/// Tunable constants for the forecasting engine.
///
/// The defaults are the documented contract:
///
/// | Setting | Default |
/// |---------|---------|
/// | regression | available |
/// | trend band | 1% of mean \|y\| |
/// | volatility buckets | `< 0.10` low, `<= 0.30` medium, above high |
/// | confidence | low below 4 points, high from 6 points with R² >= 0.80 |
/// | seasonality | 8 points minimum, ACF >= 0.5 |
/// | drift window | 3 differences |
/// | max horizon | 12 periods |
/// | recent window | 3 points |
/// | damping | off |
/// | non-negative floor | off |
///
/// With `high_volatility_damping = Some(phi)`, forecasts of highly volatile
/// series become `m + phi^h * (y_hat[h] - m)` where `m` is the recent
/// average. With `floor_at_zero`, negative predictions are clamped to zero
/// after damping.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub regression: RegressionCapability,
    pub trend: TrendConfig,
    pub volatility: VolatilityThresholds,
    pub confidence: ConfidencePolicy,
    pub seasonality: SeasonalityConfig,
    pub drift: DriftConfig,
    pub max_periods_ahead: usize,
    pub recent_window: usize,
    pub high_volatility_damping: Option<f64>,
    pub floor_at_zero: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regression: RegressionCapability::Available,
            trend: TrendConfig::default(),
            volatility: VolatilityThresholds::default(),
            confidence: ConfidencePolicy::default(),
            seasonality: SeasonalityConfig::default(),
            drift: DriftConfig::default(),
            max_periods_ahead: MAX_PERIODS_AHEAD,
            recent_window: 3,
            high_volatility_damping: None,
            floor_at_zero: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regression(mut self, regression: RegressionCapability) -> Self {
        self.regression = regression;
        self
    }

    pub fn with_trend(mut self, trend: TrendConfig) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_volatility(mut self, volatility: VolatilityThresholds) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_confidence(mut self, confidence: ConfidencePolicy) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_seasonality(mut self, seasonality: SeasonalityConfig) -> Self {
        self.seasonality = seasonality;
        self
    }

    pub fn with_drift(mut self, drift: DriftConfig) -> Self {
        self.drift = drift;
        self
    }

    pub fn with_max_periods_ahead(mut self, max: usize) -> Self {
        self.max_periods_ahead = max.max(1);
        self
    }

    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window.max(1);
        self
    }

    /// Damp forecasts of highly volatile series; `phi` is clamped to (0, 1].
    pub fn with_high_volatility_damping(mut self, phi: f64) -> Self {
        self.high_volatility_damping = Some(phi.clamp(f64::EPSILON, 1.0));
        self
    }

    pub fn with_floor_at_zero(mut self, floor: bool) -> Self {
        self.floor_at_zero = floor;
        self
    }
}
