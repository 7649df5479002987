//! Series characteristics: trend and volatility.
//!
//! # Example
//!
//! ```
//! use metric_forecast::features::{estimate_trend, score_volatility, TrendConfig, TrendDirection};
//! use metric_forecast::features::{VolatilityLevel, VolatilityThresholds};
//!
//! let series = vec![45000.0, 48000.0, 51000.0, 54000.0, 57000.0, 60000.0];
//!
//! let trend = estimate_trend(&series, &TrendConfig::default());
//! assert_eq!(trend.direction, TrendDirection::Increasing);
//! assert_eq!(trend.slope, 3000.0);
//!
//! let volatility = score_volatility(&series, &VolatilityThresholds::default());
//! assert_eq!(volatility.level, VolatilityLevel::Low);
//! ```

pub mod trend;
pub mod volatility;

pub use trend::{estimate_trend, TrendConfig, TrendDirection, TrendEstimate};
pub use volatility::{
    coefficient_of_variation, score_volatility, VolatilityLevel, VolatilityScore,
    VolatilityThresholds,
};
