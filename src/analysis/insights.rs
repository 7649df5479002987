//! Natural-language observations about a metric.
//!
//! Templates are selected purely from the computed statistics, so identical
//! inputs always yield identical text.

use crate::detection::SeasonalityResult;
use crate::features::{TrendDirection, TrendEstimate, VolatilityLevel, VolatilityScore};
use crate::models::{FallbackReason, ForecastStrategy};

/// Relative move of the first prediction, against |current|, that counts as significant.
pub const SIGNIFICANT_MOVE: f64 = 0.20;

/// Relative gap between recent and overall average that counts as a shift.
pub const PERFORMANCE_BAND: f64 = 0.10;

/// Slope p-value above which a non-stable trend is flagged as not significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Statistics behind a forecast.
#[derive(Debug, Clone, Copy)]
pub struct PredictionFacts<'a> {
    pub observations: usize,
    pub current_value: f64,
    pub predictions: &'a [f64],
    pub trend: &'a TrendEstimate,
    pub volatility: &'a VolatilityScore,
    pub strategy: ForecastStrategy,
}

/// Statistics behind a pattern analysis.
#[derive(Debug, Clone, Copy)]
pub struct PatternFacts<'a> {
    pub trend: &'a TrendEstimate,
    pub volatility: &'a VolatilityScore,
    pub seasonality: &'a SeasonalityResult,
    pub average: f64,
    pub recent_average: f64,
}

/// Observations attached to a forecast.
pub fn prediction_insights(facts: &PredictionFacts<'_>) -> Vec<String> {
    let mut insights = Vec::with_capacity(5);

    insights.push(match facts.trend.direction {
        TrendDirection::Increasing => {
            format!("📈 Upward trend detected with slope {:.4}", facts.trend.slope)
        }
        TrendDirection::Decreasing => {
            format!("📉 Downward trend detected with slope {:.4}", facts.trend.slope)
        }
        TrendDirection::Stable => {
            format!("➡️ Metric appears stable (slope {:.4})", facts.trend.slope)
        }
    });

    insights.push(match facts.volatility.level {
        VolatilityLevel::High => {
            "⚠️ High volatility detected - predictions may be less reliable".to_string()
        }
        VolatilityLevel::Medium => format!(
            "📊 Moderate volatility ({:.1}% variation around the mean)",
            facts.volatility.value * 100.0
        ),
        VolatilityLevel::Low => "📊 Low volatility - metric has been consistent".to_string(),
    });

    if let Some(outlook) = outlook(facts.current_value, facts.predictions) {
        insights.push(outlook);
    }

    if let Some(note) = fallback_note(facts.strategy) {
        insights.push(note.to_string());
    }

    if facts.observations < 4 {
        insights.push(format!(
            "ℹ️ Limited history ({} observations) - collect more data for reliable predictions",
            facts.observations
        ));
    }

    insights
}

fn fallback_note(strategy: ForecastStrategy) -> Option<&'static str> {
    use FallbackReason::*;
    match strategy {
        ForecastStrategy::Regression => None,
        ForecastStrategy::Drift(RegressionUnavailable) => {
            Some("ℹ️ Regression unavailable - forecast extends the recent average change")
        }
        ForecastStrategy::Drift(RegressionOverflow) => {
            Some("ℹ️ Regression projection overflowed - forecast extends the recent average change")
        }
        ForecastStrategy::LastValue(RegressionUnavailable) => {
            Some("ℹ️ Regression unavailable - forecast repeats the last value")
        }
        ForecastStrategy::LastValue(RegressionOverflow) => {
            Some("ℹ️ Regression projection overflowed - forecast repeats the last value")
        }
    }
}

fn outlook(current: f64, predictions: &[f64]) -> Option<String> {
    let first = *predictions.first()?;
    let last = *predictions.last()?;
    let scale = current.abs();
    let change = first - current;

    if scale > 0.0 && change > SIGNIFICANT_MOVE * scale {
        return Some("🚀 Significant growth predicted".to_string());
    }
    if scale > 0.0 && change < -SIGNIFICANT_MOVE * scale {
        return Some("⚠️ Significant decline predicted".to_string());
    }

    let periods = predictions.len();
    Some(format!(
        "🔮 Forecast moves from {:.2} to {:.2} over the next {} period{}",
        current,
        last,
        periods,
        if periods == 1 { "" } else { "s" }
    ))
}

/// Observations attached to a pattern analysis.
pub fn pattern_insights(facts: &PatternFacts<'_>) -> Vec<String> {
    let mut insights = Vec::with_capacity(4);

    insights.push(match facts.trend.direction {
        TrendDirection::Increasing => format!(
            "✅ Positive trend: Metric is growing at {:.4} per period",
            facts.trend.slope.abs()
        ),
        TrendDirection::Decreasing => format!(
            "⚠️ Negative trend: Metric is declining at {:.4} per period",
            facts.trend.slope.abs()
        ),
        TrendDirection::Stable => format!(
            "➡️ Stable: No significant trend detected (slope {:.4} per period)",
            facts.trend.slope
        ),
    });

    insights.push(
        match facts.volatility.level {
            VolatilityLevel::High => "📊 High volatility: Metric shows significant fluctuation",
            VolatilityLevel::Medium => "📊 Moderate volatility: Metric shows some fluctuation",
            VolatilityLevel::Low => "📊 Low volatility: Metric is relatively stable",
        }
        .to_string(),
    );

    let band = PERFORMANCE_BAND * facts.average.abs();
    let gap = facts.recent_average - facts.average;
    insights.push(
        if gap > band {
            "🔥 Recent performance is above historical average"
        } else if gap < -band {
            "⚠️ Recent performance is below historical average"
        } else {
            "➡️ Recent performance is in line with historical average"
        }
        .to_string(),
    );

    if let Some(period) = facts.seasonality.period {
        insights.push(format!("🔁 Repeating pattern every {} periods", period));
    }

    if facts.trend.direction != TrendDirection::Stable && facts.trend.p_value > SIGNIFICANCE_LEVEL
    {
        insights.push(format!(
            "ℹ️ Trend is not statistically significant (p = {:.2})",
            facts.trend.p_value
        ));
    }

    insights
}
