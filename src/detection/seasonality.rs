//! Seasonality detection for short metric histories.
//!
//! Detrends the series with its least-squares line and checks the
//! autocorrelation at a handful of candidate lags. Candidates come from the
//! timestamp cadence when one can be inferred, otherwise from a default set.

use crate::core::MetricSeries;
use crate::utils::{autocorrelation, fit_line};
use chrono::Duration;

/// Description returned whenever the history is too short to test any lag.
pub const NEED_MORE_DATA: &str = "Not detected (need more data)";

/// Description returned when lags were tested but none was strong enough.
pub const NOT_DETECTED: &str = "No significant seasonality detected";

/// Result of seasonality detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalityResult {
    /// Whether seasonality was detected.
    pub detected: bool,
    /// Human-readable summary.
    pub description: String,
    /// The detected seasonal period, in observations.
    pub period: Option<usize>,
    /// Autocorrelation of the detrended series at `period` (0 when not detected).
    pub strength: f64,
}

impl SeasonalityResult {
    fn insufficient() -> Self {
        Self {
            detected: false,
            description: NEED_MORE_DATA.to_string(),
            period: None,
            strength: 0.0,
        }
    }

    fn not_detected() -> Self {
        Self {
            detected: false,
            description: NOT_DETECTED.to_string(),
            period: None,
            strength: 0.0,
        }
    }

    fn detected(period: usize, strength: f64) -> Self {
        Self {
            detected: true,
            description: format!(
                "Detected (period of {} observations, strength {:.2})",
                period, strength
            ),
            period: Some(period),
            strength,
        }
    }
}

/// Configuration for seasonality detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalityConfig {
    /// Minimum history length before any lag is tested.
    pub min_observations: usize,
    /// Minimum autocorrelation for a lag to count as seasonal.
    pub threshold: f64,
    /// Lags tried when the timestamp cadence is unknown.
    pub default_lags: Vec<usize>,
    /// Share of gaps that must agree for a cadence to be inferred.
    pub spacing_tolerance: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            min_observations: 8,
            threshold: 0.5,
            default_lags: vec![2, 3, 4, 6, 12],
            spacing_tolerance: 0.5,
        }
    }
}

impl SeasonalityConfig {
    /// Set minimum history length.
    pub fn with_min_observations(mut self, min: usize) -> Self {
        self.min_observations = min.max(2);
        self
    }

    /// Set detection threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set fallback candidate lags.
    pub fn with_default_lags(mut self, lags: Vec<usize>) -> Self {
        self.default_lags = lags;
        self
    }
}

/// Candidate lags implied by a sampling interval.
///
/// Returns `None` for cadences without a conventional seasonal cycle.
pub fn cadence_lags(spacing: Duration) -> Option<Vec<usize>> {
    let hours = spacing.num_hours();
    let days = spacing.num_days();
    match (hours, days) {
        (1, _) => Some(vec![24]),
        (_, 1) => Some(vec![7]),
        (_, 7) => Some(vec![4, 13, 52]),
        (_, 28..=31) => Some(vec![3, 12]),
        (_, 89..=92) => Some(vec![4]),
        _ => None,
    }
}

fn candidate_lags(series: &MetricSeries, config: &SeasonalityConfig) -> Vec<usize> {
    series
        .infer_spacing(config.spacing_tolerance)
        .ok()
        .and_then(cadence_lags)
        .unwrap_or_else(|| config.default_lags.clone())
}

/// Detect seasonality in a metric series.
pub fn detect_seasonality(series: &MetricSeries, config: &SeasonalityConfig) -> SeasonalityResult {
    let n = series.len();
    if n < config.min_observations {
        return SeasonalityResult::insufficient();
    }

    let mut lags: Vec<usize> = candidate_lags(series, config)
        .into_iter()
        .filter(|&lag| lag >= 1 && n >= 2 * lag)
        .collect();
    lags.sort_unstable();
    lags.dedup();

    if lags.is_empty() {
        return SeasonalityResult::insufficient();
    }

    let values = series.values();
    let detrended: Vec<f64> = match fit_line(values) {
        Ok(line) => values
            .iter()
            .enumerate()
            .map(|(i, &y)| y - line.value_at(i as f64))
            .collect(),
        Err(_) => values.to_vec(),
    };

    let mut best: Option<(usize, f64)> = None;
    for lag in lags {
        let acf = autocorrelation(&detrended, lag);
        if !acf.is_finite() || acf < config.threshold {
            continue;
        }
        if best.map_or(true, |(_, best_acf)| acf > best_acf) {
            best = Some((lag, acf));
        }
    }

    match best {
        Some((period, strength)) => SeasonalityResult::detected(period, strength.min(1.0)),
        None => SeasonalityResult::not_detected(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn generate_seasonal_series(n: usize, period: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin())
            .collect()
    }

    fn spaced(n: usize, step: Duration) -> Vec<DateTime<Utc>> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| base + step * i as i32).collect()
    }

    #[test]
    fn short_series_needs_more_data() {
        let series = MetricSeries::from_values(vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0]).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(!result.detected);
        assert_eq!(result.description, "Not detected (need more data)");
        assert_eq!(result.period, None);
    }

    #[test]
    fn detects_quarterly_pattern_without_timestamps() {
        let series = MetricSeries::from_values(generate_seasonal_series(24, 4)).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(result.detected);
        assert_eq!(result.period, Some(4));
        assert!(result.strength > 0.5);
        assert!(result.description.starts_with("Detected (period of 4 observations"));
    }

    #[test]
    fn detects_pattern_on_top_of_trend() {
        let values: Vec<f64> = generate_seasonal_series(24, 6)
            .into_iter()
            .enumerate()
            .map(|(i, v)| v + 5.0 * i as f64)
            .collect();
        let series = MetricSeries::from_values(values).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(result.detected);
        assert_eq!(result.period, Some(6));
    }

    #[test]
    fn pure_trend_is_not_seasonal() {
        let values: Vec<f64> = (0..20).map(|i| 1000.0 + 25.0 * i as f64).collect();
        let series = MetricSeries::from_values(values).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(!result.detected);
        assert_eq!(result.description, NOT_DETECTED);
    }

    #[test]
    fn constant_series_is_not_seasonal() {
        let series = MetricSeries::from_values(vec![5.0; 16]).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(!result.detected);
        assert_eq!(result.strength, 0.0);
    }

    #[test]
    fn daily_cadence_tests_weekly_lag() {
        let values = generate_seasonal_series(28, 7);
        let series = MetricSeries::new(values, Some(spaced(28, Duration::days(1)))).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert!(result.detected);
        assert_eq!(result.period, Some(7));
    }

    #[test]
    fn hourly_cadence_with_short_history_needs_more_data() {
        let values = generate_seasonal_series(30, 24);
        let series = MetricSeries::new(values, Some(spaced(30, Duration::hours(1)))).unwrap();
        let result = detect_seasonality(&series, &SeasonalityConfig::default());
        assert_eq!(result.description, NEED_MORE_DATA);
    }

    #[test]
    fn cadence_lags_cover_common_intervals() {
        assert_eq!(cadence_lags(Duration::hours(1)), Some(vec![24]));
        assert_eq!(cadence_lags(Duration::days(1)), Some(vec![7]));
        assert_eq!(cadence_lags(Duration::weeks(1)), Some(vec![4, 13, 52]));
        assert_eq!(cadence_lags(Duration::days(30)), Some(vec![3, 12]));
        assert_eq!(cadence_lags(Duration::days(91)), Some(vec![4]));
        assert_eq!(cadence_lags(Duration::minutes(5)), None);
    }

    #[test]
    fn config_default() {
        let config = SeasonalityConfig::default();
        assert_eq!(config.min_observations, 8);
        assert_eq!(config.default_lags, vec![2, 3, 4, 6, 12]);
        assert!((config.threshold - 0.5).abs() < 1e-10);
    }
}
