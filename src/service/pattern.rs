//! Descriptive pattern analysis.

use super::{profile, EngineConfig, SeriesProfile};
use crate::analysis::{pattern_insights, PatternFacts};
use crate::api::{PatternRequest, PatternResult};
use crate::core::MetricSeries;
use crate::detection::detect_seasonality;
use crate::error::Result;
use crate::utils::stats;
use crate::validation::SeriesValidator;
use tracing::debug;

/// Produces [`PatternResult`]s.
#[derive(Debug, Clone, Default)]
pub struct PatternAnalysisService {
    config: EngineConfig,
    validator: SeriesValidator,
}

impl PatternAnalysisService {
    pub fn new(config: EngineConfig) -> Self {
        let validator = SeriesValidator::new(config.max_periods_ahead);
        Self { config, validator }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a request and describe its series.
    pub fn analyze(&self, request: &PatternRequest) -> Result<PatternResult> {
        let (values, timestamps) = request
            .historical_values
            .normalize(request.timestamps.as_deref())?;
        let series = self
            .validator
            .validate_series(&values, timestamps.as_deref())?;
        Ok(self.analyze_series(&request.metric_name, &series))
    }

    /// Describe an already validated series.
    pub fn analyze_series(&self, metric_name: &str, series: &MetricSeries) -> PatternResult {
        let SeriesProfile { trend, volatility } = profile(series, &self.config);
        let seasonality = detect_seasonality(series, &self.config.seasonality);
        let average = stats::mean(series.values());
        let recent_average = stats::mean(series.tail(self.config.recent_window));

        debug!(
            metric = metric_name,
            observations = series.len(),
            trend = %trend.direction,
            volatility = volatility.value,
            seasonal_period = ?seasonality.period,
            "pattern analysis computed"
        );

        let insights = pattern_insights(&PatternFacts {
            trend: &trend,
            volatility: &volatility,
            seasonality: &seasonality,
            average,
            recent_average,
        });

        PatternResult {
            metric_name: metric_name.to_string(),
            trend: trend.direction,
            slope: trend.slope,
            volatility_level: volatility.level,
            volatility_value: volatility.value,
            seasonality: seasonality.description,
            average,
            recent_average,
            insights,
        }
    }
}
