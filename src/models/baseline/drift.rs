//! Mean-difference drift model.
//!
//! Fallback used when the regression forecaster is unavailable. Forecasts
//! the last value plus a drift equal to the mean of the most recent first
//! differences: `y_hat[t+h] = y[t] + h * drift`.

use crate::core::{Forecast, MetricSeries};
use crate::error::{ForecastError, Result};
use crate::features::TrendEstimate;
use crate::models::Forecaster;
use crate::utils::stats;

/// Configuration for the drift estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftConfig {
    /// Number of trailing first differences averaged into the drift.
    pub window: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl DriftConfig {
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }
}

/// Drift forecaster over recent first differences.
#[derive(Debug, Clone, Default)]
pub struct MeanDifferenceDrift {
    config: DriftConfig,
    last_value: Option<f64>,
    drift: Option<f64>,
    fitted: Option<Vec<f64>>,
}

impl MeanDifferenceDrift {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DriftConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get the estimated drift parameter.
    pub fn drift(&self) -> Option<f64> {
        self.drift
    }
}

impl Forecaster for MeanDifferenceDrift {
    fn fit(&mut self, series: &MetricSeries, _trend: &TrendEstimate) -> Result<()> {
        let values = series.values();
        let last = *values.last().ok_or(ForecastError::EmptyData)?;

        let diffs = stats::first_differences(values);
        let recent = &diffs[diffs.len().saturating_sub(self.config.window)..];
        let drift = if recent.is_empty() {
            0.0
        } else {
            stats::mean(recent)
        };

        // Fitted values: y_hat[0] = y[0], y_hat[t] = y[t-1] + drift
        let mut fitted = Vec::with_capacity(values.len());
        fitted.push(values[0]);
        fitted.extend(values.windows(2).map(|w| w[0] + drift));

        self.last_value = Some(last);
        self.drift = Some(drift);
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let last = self.last_value.ok_or(ForecastError::FitRequired)?;
        let drift = self.drift.ok_or(ForecastError::FitRequired)?;

        let forecast =
            Forecast::from_values((1..=horizon).map(|h| last + (h as f64) * drift).collect());

        if !forecast.is_finite() {
            return Err(ForecastError::ComputationError(
                "drift extrapolation overflowed".to_string(),
            ));
        }
        Ok(forecast)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn name(&self) -> &str {
        "MeanDifferenceDrift"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
