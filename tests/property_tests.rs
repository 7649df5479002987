//! Property-based tests for the forecasting engine.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated metric series.

use metric_forecast::prelude::*;
use proptest::prelude::*;

/// Strategy for generating valid metric values.
/// Avoids extreme magnitudes that could overflow the least-squares sums.
fn valid_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6_f64, min_len..max_len)
}

/// Strategy for generating strictly monotonic series.
fn monotonic_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(0.001..50.0_f64, min_len..max_len),
        -1000.0..1000.0_f64,
        any::<bool>(),
    )
        .prop_map(|(steps, start, rising)| {
            let sign = if rising { 1.0 } else { -1.0 };
            let mut level = start;
            let mut values = vec![start];
            for step in steps {
                level += sign * step;
                values.push(level);
            }
            values
        })
}

// =============================================================================
// Property: Forecast length matches requested horizon
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn forecast_length_matches_horizon(
        values in valid_values_strategy(1, 60),
        horizon in 1usize..=12
    ) {
        let request = PredictRequest::new("metric", values.clone()).with_periods_ahead(horizon);
        let result = predict_metric(&request).unwrap();
        prop_assert_eq!(result.predictions.len(), horizon);
        prop_assert_eq!(result.current_value, *values.last().unwrap());
        prop_assert!(result.predictions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn drift_fallback_matches_horizon(
        values in valid_values_strategy(1, 60),
        horizon in 1usize..=12
    ) {
        let service = PredictionService::new(
            EngineConfig::default().with_regression(RegressionCapability::Unavailable),
        );
        let request = PredictRequest::new("metric", values).with_periods_ahead(horizon);
        let result = service.predict(&request).unwrap();
        prop_assert_eq!(result.predictions.len(), horizon);
        prop_assert_ne!(result.confidence_level, ConfidenceLevel::High);
    }
}

// =============================================================================
// Property: Strictly monotonic series take the direction of their slope
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn monotonic_series_are_never_stable(values in monotonic_values_strategy(1, 40)) {
        let rising = values[1] > values[0];
        let result = analyze_pattern(&PatternRequest::new("metric", values)).unwrap();
        let expected = if rising {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };
        prop_assert_eq!(result.trend, expected);
    }
}

// =============================================================================
// Property: Confidence rules
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn short_history_is_low_confidence(values in valid_values_strategy(1, 4)) {
        let result = predict_metric(&PredictRequest::new("metric", values)).unwrap();
        prop_assert_eq!(result.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn high_volatility_is_low_confidence(values in valid_values_strategy(1, 60)) {
        let result = predict_metric(&PredictRequest::new("metric", values)).unwrap();
        if result.volatility == VolatilityLevel::High {
            prop_assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        }
    }
}

// =============================================================================
// Property: Both operations agree on shared statistics
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn operations_agree_on_trend_and_volatility(values in valid_values_strategy(1, 60)) {
        let prediction = predict_metric(&PredictRequest::new("metric", values.clone())).unwrap();
        let pattern = analyze_pattern(&PatternRequest::new("metric", values)).unwrap();
        prop_assert_eq!(prediction.trend, pattern.trend);
        prop_assert_eq!(prediction.volatility, pattern.volatility_level);
    }

    #[test]
    fn average_is_arithmetic_mean(values in valid_values_strategy(1, 60)) {
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        let tail = &values[values.len().saturating_sub(3)..];
        let expected_recent = tail.iter().sum::<f64>() / tail.len() as f64;

        let result = analyze_pattern(&PatternRequest::new("metric", values)).unwrap();
        prop_assert!((result.average - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        prop_assert!(
            (result.recent_average - expected_recent).abs() <= 1e-9 * expected_recent.abs().max(1.0)
        );
        prop_assert!(result.volatility_value >= 0.0);
    }

    #[test]
    fn identical_requests_give_identical_results(values in valid_values_strategy(1, 30)) {
        let request = PredictRequest::new("metric", values);
        prop_assert_eq!(predict_metric(&request).unwrap(), predict_metric(&request).unwrap());
    }
}
