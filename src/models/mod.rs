//! Forecasting strategies.
//!
//! [`LinearTrendForecaster`] extends the least-squares trend line and is the
//! preferred strategy. [`MeanDifferenceDrift`] stands in for it when the
//! engine is configured without regression support, or when the regression
//! projection cannot be computed.

mod regression;
mod traits;

pub mod baseline;

pub use baseline::{DriftConfig, MeanDifferenceDrift};
pub use regression::LinearTrendForecaster;
pub use traits::{BoxedForecaster, Forecaster};

/// Whether the regression strategy may be used.
///
/// Chosen once when a service is constructed; never probed at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegressionCapability {
    #[default]
    Available,
    Unavailable,
}

impl RegressionCapability {
    /// Create the preferred forecaster for this capability.
    pub fn forecaster(&self, drift: DriftConfig) -> BoxedForecaster {
        match self {
            RegressionCapability::Available => Box::new(LinearTrendForecaster::new()),
            RegressionCapability::Unavailable => Box::new(MeanDifferenceDrift::with_config(drift)),
        }
    }
}

/// Why a fallback strategy produced the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Regression was configured as unavailable.
    RegressionUnavailable,
    /// Regression was available but its projection was not finite.
    RegressionOverflow,
}

/// The strategy that actually produced a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastStrategy {
    Regression,
    Drift(FallbackReason),
    /// Last observation repeated; used when drift also fails.
    LastValue(FallbackReason),
}

impl ForecastStrategy {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, ForecastStrategy::Regression)
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            ForecastStrategy::Regression => None,
            ForecastStrategy::Drift(reason) | ForecastStrategy::LastValue(reason) => Some(*reason),
        }
    }
}
