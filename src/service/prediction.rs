//! Forecast orchestration.

use super::{profile, EngineConfig, SeriesProfile};
use crate::analysis::{prediction_insights, PredictionFacts};
use crate::api::{PredictRequest, PredictionResult};
use crate::core::{Forecast, MetricSeries};
use crate::error::Result;
use crate::features::{TrendEstimate, VolatilityLevel};
use crate::models::{FallbackReason, ForecastStrategy, Forecaster, MeanDifferenceDrift};
use crate::utils::stats;
use crate::validation::SeriesValidator;
use tracing::{debug, warn};

/// Produces [`PredictionResult`]s.
///
/// Holds only immutable configuration; one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct PredictionService {
    config: EngineConfig,
    validator: SeriesValidator,
}

impl PredictionService {
    pub fn new(config: EngineConfig) -> Self {
        let validator = SeriesValidator::new(config.max_periods_ahead);
        Self { config, validator }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a request and forecast it.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictionResult> {
        let (values, timestamps) = request
            .historical_values
            .normalize(request.timestamps.as_deref())?;
        let horizon = self.validator.validate_horizon(request.periods_ahead)?;
        let series = self
            .validator
            .validate_series(&values, timestamps.as_deref())?;
        Ok(self.forecast_series(&request.metric_name, &series, horizon))
    }

    /// Forecast an already validated series.
    pub fn predict_series(
        &self,
        metric_name: &str,
        series: &MetricSeries,
        periods_ahead: usize,
    ) -> Result<PredictionResult> {
        let horizon = self.validator.validate_horizon(periods_ahead)?;
        Ok(self.forecast_series(metric_name, series, horizon))
    }

    fn forecast_series(
        &self,
        metric_name: &str,
        series: &MetricSeries,
        horizon: usize,
    ) -> PredictionResult {
        let SeriesProfile { trend, volatility } = profile(series, &self.config);
        let (forecast, strategy) = self.extrapolate(series, &trend, horizon);
        let forecast = self.post_process(forecast, series, volatility.level);

        let confidence = self.config.confidence.classify(
            series.len(),
            trend.fit_quality,
            volatility.level,
            strategy.is_fallback(),
        );

        debug!(
            metric = metric_name,
            observations = series.len(),
            slope = trend.slope,
            fit_quality = trend.fit_quality,
            volatility = volatility.value,
            confidence = %confidence,
            strategy = ?strategy,
            "forecast computed"
        );

        let predictions = forecast.into_values();
        let current_value = series.last();
        let insights = prediction_insights(&PredictionFacts {
            observations: series.len(),
            current_value,
            predictions: &predictions,
            trend: &trend,
            volatility: &volatility,
            strategy,
        });

        PredictionResult {
            metric_name: metric_name.to_string(),
            current_value,
            predictions,
            confidence_level: confidence,
            trend: trend.direction,
            volatility: volatility.level,
            insights,
        }
    }

    /// Run the configured strategy, substituting the drift model on failure.
    ///
    /// Returns the forecast and the strategy that produced it.
    fn extrapolate(
        &self,
        series: &MetricSeries,
        trend: &TrendEstimate,
        horizon: usize,
    ) -> (Forecast, ForecastStrategy) {
        let mut model = self.config.regression.forecaster(self.config.drift);
        let reason = if model.is_fallback() {
            FallbackReason::RegressionUnavailable
        } else {
            FallbackReason::RegressionOverflow
        };
        let primary = model
            .fit(series, trend)
            .and_then(|_| model.predict(horizon));

        match primary {
            Ok(forecast) if model.is_fallback() => return (forecast, ForecastStrategy::Drift(reason)),
            Ok(forecast) => return (forecast, ForecastStrategy::Regression),
            Err(err) => warn!(
                model = model.name(),
                error = %err,
                "preferred forecaster failed, substituting drift fallback"
            ),
        }

        let mut drift = MeanDifferenceDrift::with_config(self.config.drift);
        match drift.fit(series, trend).and_then(|_| drift.predict(horizon)) {
            Ok(forecast) => (forecast, ForecastStrategy::Drift(reason)),
            Err(err) => {
                warn!(error = %err, "drift fallback failed, repeating last value");
                (
                    Forecast::from_values(vec![series.last(); horizon]),
                    ForecastStrategy::LastValue(reason),
                )
            }
        }
    }

    fn post_process(
        &self,
        mut forecast: Forecast,
        series: &MetricSeries,
        volatility: VolatilityLevel,
    ) -> Forecast {
        if let (Some(phi), VolatilityLevel::High) = (self.config.high_volatility_damping, volatility)
        {
            let anchor = stats::mean(series.tail(self.config.recent_window));
            forecast = forecast.damped_toward(anchor, phi);
        }
        if self.config.floor_at_zero {
            forecast = forecast.floored_at_zero();
        }
        forecast
    }
}
