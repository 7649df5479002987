//! Request and result types exchanged with the transport layer.
//!
//! Field names and enum spellings here are the wire contract.

use crate::analysis::ConfidenceLevel;
use crate::error::{ForecastError, Result};
use crate::features::{TrendDirection, VolatilityLevel};
use crate::validation::DEFAULT_PERIODS_AHEAD;
use serde::{Deserialize, Serialize};

/// One timestamped observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: String,
    pub value: f64,
}

/// Accepted shapes of `historical_values`.
///
/// Either a bare array of numbers, or an array of `{timestamp, value}`
/// points. Both normalize to the same values/timestamps pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoricalValues {
    Plain(Vec<f64>),
    Points(Vec<DataPoint>),
}

impl From<Vec<f64>> for HistoricalValues {
    fn from(values: Vec<f64>) -> Self {
        HistoricalValues::Plain(values)
    }
}

impl From<Vec<DataPoint>> for HistoricalValues {
    fn from(points: Vec<DataPoint>) -> Self {
        HistoricalValues::Points(points)
    }
}

impl HistoricalValues {
    /// Split into values and timestamps, merging a separately supplied timestamp list.
    pub fn normalize(
        &self,
        timestamps: Option<&[String]>,
    ) -> Result<(Vec<f64>, Option<Vec<String>>)> {
        match self {
            HistoricalValues::Plain(values) => {
                Ok((values.clone(), timestamps.map(|ts| ts.to_vec())))
            }
            HistoricalValues::Points(points) => {
                if timestamps.is_some() {
                    return Err(ForecastError::InvalidParameter(
                        "timestamps given both inline and as a separate list".to_string(),
                    ));
                }
                let values = points.iter().map(|p| p.value).collect();
                let stamps = points.iter().map(|p| p.timestamp.clone()).collect();
                Ok((values, Some(stamps)))
            }
        }
    }
}

fn default_periods_ahead() -> usize {
    DEFAULT_PERIODS_AHEAD
}

/// Input of the forecast operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub metric_name: String,
    pub historical_values: HistoricalValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<String>>,
    #[serde(default = "default_periods_ahead")]
    pub periods_ahead: usize,
}

impl PredictRequest {
    pub fn new(metric_name: impl Into<String>, values: impl Into<HistoricalValues>) -> Self {
        Self {
            metric_name: metric_name.into(),
            historical_values: values.into(),
            timestamps: None,
            periods_ahead: DEFAULT_PERIODS_AHEAD,
        }
    }

    pub fn with_timestamps(mut self, timestamps: Vec<String>) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    pub fn with_periods_ahead(mut self, periods_ahead: usize) -> Self {
        self.periods_ahead = periods_ahead;
        self
    }

    /// Decode a request body; undecodable input is a validation error.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Input of the pattern-analysis operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRequest {
    pub metric_name: String,
    pub historical_values: HistoricalValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<String>>,
}

impl PatternRequest {
    pub fn new(metric_name: impl Into<String>, values: impl Into<HistoricalValues>) -> Self {
        Self {
            metric_name: metric_name.into(),
            historical_values: values.into(),
            timestamps: None,
        }
    }

    pub fn with_timestamps(mut self, timestamps: Vec<String>) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    /// Decode a request body; undecodable input is a validation error.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Output of the forecast operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub metric_name: String,
    pub current_value: f64,
    pub predictions: Vec<f64>,
    pub confidence_level: ConfidenceLevel,
    pub trend: TrendDirection,
    pub volatility: VolatilityLevel,
    pub insights: Vec<String>,
}

/// Output of the pattern-analysis operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub metric_name: String,
    pub trend: TrendDirection,
    pub slope: f64,
    pub volatility_level: VolatilityLevel,
    pub volatility_value: f64,
    pub seasonality: String,
    pub average: f64,
    pub recent_average: f64,
    pub insights: Vec<String>,
}
