//! Input validation performed before any computation.

use crate::core::MetricSeries;
use crate::error::{ForecastError, Result};

/// Default number of periods to forecast.
pub const DEFAULT_PERIODS_AHEAD: usize = 3;

/// Default upper bound on the forecast horizon.
pub const MAX_PERIODS_AHEAD: usize = 12;

/// Checks caller input and turns it into a [`MetricSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesValidator {
    max_periods_ahead: usize,
}

impl Default for SeriesValidator {
    fn default() -> Self {
        Self {
            max_periods_ahead: MAX_PERIODS_AHEAD,
        }
    }
}

impl SeriesValidator {
    pub fn new(max_periods_ahead: usize) -> Self {
        Self {
            max_periods_ahead: max_periods_ahead.max(1),
        }
    }

    pub fn max_periods_ahead(&self) -> usize {
        self.max_periods_ahead
    }

    /// Validate values and optional ISO-8601 timestamps.
    pub fn validate_series(
        &self,
        values: &[f64],
        timestamps: Option<&[String]>,
    ) -> Result<MetricSeries> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        match timestamps {
            Some(ts) => {
                if ts.len() != values.len() {
                    return Err(ForecastError::DimensionMismatch {
                        expected: values.len(),
                        got: ts.len(),
                    });
                }
                MetricSeries::with_iso_timestamps(values.to_vec(), ts)
            }
            None => MetricSeries::from_values(values.to_vec()),
        }
    }

    /// Validate the requested forecast horizon.
    pub fn validate_horizon(&self, periods_ahead: usize) -> Result<usize> {
        if periods_ahead == 0 || periods_ahead > self.max_periods_ahead {
            return Err(ForecastError::InvalidParameter(format!(
                "periods_ahead must be between 1 and {}, got {}",
                self.max_periods_ahead, periods_ahead
            )));
        }
        Ok(periods_ahead)
    }
}
