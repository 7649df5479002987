//! # metric-forecast
//!
//! Short-horizon forecasting and pattern analysis for business metric series.
//!
//! Two operations are exposed:
//!
//! - [`predict_metric`]: extrapolate a series a few periods ahead, with a
//!   trend label, volatility label, confidence level, and plain-language
//!   insights.
//! - [`analyze_pattern`]: describe a series by its trend, volatility,
//!   seasonality, overall and recent averages.
//!
//! Both are pure functions of their input. Use [`PredictionService`] or
//! [`PatternAnalysisService`] with an [`EngineConfig`] to change the
//! defaults.
//!
//! ```
//! use metric_forecast::prelude::*;
//!
//! let request = PredictRequest::new("churn_rate", vec![5.0, 4.8, 4.5, 4.3, 4.0, 3.8, 3.5]);
//! let result = predict_metric(&request).unwrap();
//! assert_eq!(result.predictions.len(), 3);
//! assert_eq!(result.trend, TrendDirection::Decreasing);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod api;
pub mod core;
pub mod detection;
pub mod error;
pub mod features;
pub mod models;
pub mod service;
pub mod utils;
pub mod validation;

pub use api::{
    DataPoint, HistoricalValues, PatternRequest, PatternResult, PredictRequest, PredictionResult,
};
pub use error::{ForecastError, Result};
pub use service::{EngineConfig, PatternAnalysisService, PredictionService};

/// Forecast a metric with the default engine configuration.
pub fn predict_metric(request: &PredictRequest) -> Result<PredictionResult> {
    PredictionService::default().predict(request)
}

/// Analyze the patterns of a metric with the default engine configuration.
pub fn analyze_pattern(request: &PatternRequest) -> Result<PatternResult> {
    PatternAnalysisService::default().analyze(request)
}

pub mod prelude {
    pub use crate::analysis::ConfidenceLevel;
    pub use crate::api::{
        DataPoint, HistoricalValues, PatternRequest, PatternResult, PredictRequest,
        PredictionResult,
    };
    pub use crate::core::{Forecast, MetricSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::features::{TrendDirection, VolatilityLevel};
    pub use crate::models::{Forecaster, RegressionCapability};
    pub use crate::service::{EngineConfig, PatternAnalysisService, PredictionService};
    pub use crate::{analyze_pattern, predict_metric};
}
