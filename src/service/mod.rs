//! Orchestrators assembling the two public results.
//!
//! Both services share one profiling step, so the trend and volatility
//! reported for a series never differ between the two operations.

mod config;
mod pattern;
mod prediction;

pub use config::EngineConfig;
pub use pattern::PatternAnalysisService;
pub use prediction::PredictionService;

use crate::core::MetricSeries;
use crate::features::{estimate_trend, score_volatility, TrendEstimate, VolatilityScore};
use tracing::debug;

/// Trend and volatility of a validated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SeriesProfile {
    pub trend: TrendEstimate,
    pub volatility: VolatilityScore,
}

pub(crate) fn profile(series: &MetricSeries, config: &EngineConfig) -> SeriesProfile {
    let values = series.values();
    let trend = estimate_trend(values, &config.trend);
    let volatility = score_volatility(values, &config.volatility);

    if series.len() < 2 || volatility.value == 0.0 {
        debug!(
            observations = series.len(),
            "degenerate series resolved to flat defaults"
        );
    }

    SeriesProfile { trend, volatility }
}
