//! Forecaster trait defining the common interface for both strategies.

use crate::core::{Forecast, MetricSeries};
use crate::error::Result;
use crate::features::TrendEstimate;

/// Common interface for forecasting strategies.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster: Send + Sync {
    /// Fit the model to a series and its estimated trend.
    fn fit(&mut self, series: &MetricSeries, trend: &TrendEstimate) -> Result<()>;

    /// Generate predictions for the specified horizon.
    fn predict(&self, horizon: usize) -> Result<Forecast>;

    /// Get the fitted values (in-sample predictions).
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Whether this strategy stands in for the regression model.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use metric_forecast::models::{BoxedForecaster, Forecaster, LinearTrendForecaster};
///
/// let model: BoxedForecaster = Box::new(LinearTrendForecaster::new());
/// assert_eq!(model.name(), "LinearTrend");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;
