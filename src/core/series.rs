//! MetricSeries data structure for a single business metric history.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashMap;

/// An ordered history of one metric with optional timestamps.
///
/// Construction checks that values are finite and that timestamps, when
/// present, match the values in length and are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    values: Vec<f64>,
    timestamps: Option<Vec<DateTime<Utc>>>,
}

impl MetricSeries {
    /// Create a series from values and optional timestamps.
    pub fn new(values: Vec<f64>, timestamps: Option<Vec<DateTime<Utc>>>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ForecastError::NonFiniteValue { index, value });
        }

        if let Some(ts) = &timestamps {
            if ts.len() != values.len() {
                return Err(ForecastError::DimensionMismatch {
                    expected: values.len(),
                    got: ts.len(),
                });
            }
            for i in 1..ts.len() {
                if ts[i] <= ts[i - 1] {
                    return Err(ForecastError::TimestampError(
                        "timestamps must be strictly increasing".to_string(),
                    ));
                }
            }
        }

        Ok(Self { values, timestamps })
    }

    /// Create a series without timestamps.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Self::new(values, None)
    }

    /// Create a series from values and ISO-8601 timestamp strings.
    ///
    /// Accepts RFC 3339 date-times and plain `YYYY-MM-DD` dates (midnight UTC).
    pub fn with_iso_timestamps(values: Vec<f64>, timestamps: &[String]) -> Result<Self> {
        let parsed = timestamps
            .iter()
            .map(|s| parse_timestamp(s))
            .collect::<Result<Vec<_>>>()?;
        Self::new(values, Some(parsed))
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn timestamps(&self) -> Option<&[DateTime<Utc>]> {
        self.timestamps.as_deref()
    }

    /// Most recent observation.
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Trailing window of at most `window` observations.
    pub fn tail(&self, window: usize) -> &[f64] {
        let start = self.values.len().saturating_sub(window.max(1));
        &self.values[start..]
    }

    /// Infer the modal spacing between timestamps.
    ///
    /// `tolerance` is the minimum share of gaps that must equal the modal gap.
    /// Ties between equally common gaps resolve to the shorter one.
    pub fn infer_spacing(&self, tolerance: f64) -> Result<Duration> {
        let timestamps = self.timestamps.as_ref().ok_or_else(|| {
            ForecastError::FrequencyInference("series has no timestamps".to_string())
        })?;

        if timestamps.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: timestamps.len(),
            });
        }

        let diffs: Vec<i64> = timestamps
            .windows(2)
            .map(|w| (w[1] - w[0]).num_seconds())
            .collect();

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for &diff in &diffs {
            *counts.entry(diff).or_insert(0) += 1;
        }

        let (modal_diff, modal_count) = counts
            .iter()
            .max_by(|(da, ca), (db, cb)| ca.cmp(cb).then(db.cmp(da)))
            .map(|(&diff, &count)| (diff, count))
            .ok_or(ForecastError::FrequencyInference(
                "empty spacing data".to_string(),
            ))?;

        let modal_ratio = modal_count as f64 / diffs.len() as f64;
        if modal_ratio < tolerance {
            return Err(ForecastError::FrequencyInference(
                "no unique modal spacing found".to_string(),
            ));
        }

        Ok(Duration::seconds(modal_diff))
    }
}

/// Parse an ISO-8601 timestamp (RFC 3339 or `YYYY-MM-DD`).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ForecastError::TimestampError(format!("unparseable timestamp '{}'", raw)))
}
