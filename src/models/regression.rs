//! Linear trend extrapolation.
//!
//! Projects the least-squares line fitted by the trend estimator:
//! `y_hat[n - 1 + h] = intercept + slope * (n - 1 + h)`.

use crate::core::{Forecast, MetricSeries};
use crate::error::{ForecastError, Result};
use crate::features::TrendEstimate;
use crate::models::Forecaster;

/// Regression-backed forecaster extending the fitted trend line.
#[derive(Debug, Clone, Default)]
pub struct LinearTrendForecaster {
    slope: Option<f64>,
    intercept: Option<f64>,
    n: usize,
    fitted: Option<Vec<f64>>,
}

impl LinearTrendForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slope of the fitted line.
    pub fn slope(&self) -> Option<f64> {
        self.slope
    }
}

impl Forecaster for LinearTrendForecaster {
    fn fit(&mut self, series: &MetricSeries, trend: &TrendEstimate) -> Result<()> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if !trend.slope.is_finite() || !trend.intercept.is_finite() {
            return Err(ForecastError::ComputationError(
                "trend line is not finite".to_string(),
            ));
        }

        self.n = series.len();
        self.slope = Some(trend.slope);
        self.intercept = Some(trend.intercept);
        self.fitted = Some((0..self.n).map(|i| trend.value_at(i as f64)).collect());

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let slope = self.slope.ok_or(ForecastError::FitRequired)?;
        let intercept = self.intercept.ok_or(ForecastError::FitRequired)?;

        let origin = (self.n - 1) as f64;
        let forecast = Forecast::from_values(
            (1..=horizon)
                .map(|h| intercept + slope * (origin + h as f64))
                .collect(),
        );

        if !forecast.is_finite() {
            return Err(ForecastError::ComputationError(
                "linear extrapolation overflowed".to_string(),
            ));
        }
        Ok(forecast)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn name(&self) -> &str {
        "LinearTrend"
    }
}
