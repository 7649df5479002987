//! Statistical utility functions.

/// Calculate the mean of a slice.
///
/// Falls back to summing values scaled by the largest magnitude when the
/// plain sum overflows, so any slice of finite values has a finite mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return sum / n;
    }
    let scale = max_abs(values);
    values.iter().map(|v| v / scale).sum::<f64>() / n * scale
}

/// Mean of absolute values, used as the scale of a series.
pub fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let sum = values.iter().map(|v| v.abs()).sum::<f64>();
    if sum.is_finite() {
        return sum / n;
    }
    let scale = max_abs(values);
    values.iter().map(|v| v.abs() / scale).sum::<f64>() / n * scale
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Population variance (n denominator).
///
/// May be infinite for values near `f64::MAX`; use [`population_std_dev`]
/// when only the spread is needed.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (n denominator).
pub fn population_std_dev(values: &[f64]) -> f64 {
    let std = population_variance(values).sqrt();
    if std.is_finite() || values.is_empty() {
        return std;
    }
    // Squared deviations overflowed: compute on values scaled into [-1, 1].
    let scale = max_abs(values);
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    population_variance(&scaled).sqrt() * scale
}

/// First differences `y[t] - y[t-1]`.
pub fn first_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Whether every step moves in the same strict direction.
///
/// Returns `Some(true)` for strictly increasing, `Some(false)` for strictly
/// decreasing, `None` otherwise (including series shorter than two points).
pub fn strict_monotonic_direction(values: &[f64]) -> Option<bool> {
    if values.len() < 2 {
        return None;
    }
    if values.windows(2).all(|w| w[1] > w[0]) {
        Some(true)
    } else if values.windows(2).all(|w| w[1] < w[0]) {
        Some(false)
    } else {
        None
    }
}

/// Calculate the autocorrelation at a given lag.
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if values.len() <= lag {
        return f64::NAN;
    }
    let m = mean(values);
    let n = values.len();

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for i in 0..n {
        denominator += (values[i] - m).powi(2);
        if i >= lag {
            numerator += (values[i] - m) * (values[i - lag] - m);
        }
    }

    if denominator < 1e-12 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn mean_survives_overflowing_sums() {
        assert_eq!(mean(&[1e308; 3]), 1e308);
        assert_eq!(mean_abs(&[-1e308, 1e308, -1e308]), 1e308);
        assert_relative_eq!(mean(&[1.5e308, 1.5e308, 0.0]), 1e308, max_relative = 1e-12);
    }

    #[test]
    fn std_dev_survives_overflowing_squares() {
        assert_eq!(population_std_dev(&[1e308; 4]), 0.0);
        assert_relative_eq!(
            population_std_dev(&[-1e308, 1e308]),
            1e308,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mean_abs_ignores_sign() {
        assert_relative_eq!(mean_abs(&[-2.0, 2.0, -4.0, 4.0]), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn population_std_dev_uses_n_denominator() {
        // Population variance of [2, 4, 4, 4, 5, 5, 7, 9] = 4
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_variance(&values), 4.0, epsilon = 1e-10);
        assert_relative_eq!(population_std_dev(&values), 2.0, epsilon = 1e-10);
        assert_relative_eq!(population_std_dev(&[7.0]), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn first_differences_are_pairwise() {
        assert_eq!(first_differences(&[1.0, 3.0, 6.0]), vec![2.0, 3.0]);
        assert!(first_differences(&[1.0]).is_empty());
    }

    #[test]
    fn monotonic_direction_detection() {
        assert_eq!(strict_monotonic_direction(&[1.0, 2.0, 3.0]), Some(true));
        assert_eq!(strict_monotonic_direction(&[3.0, 2.0, 1.0]), Some(false));
        assert_eq!(strict_monotonic_direction(&[1.0, 1.0, 2.0]), None);
        assert_eq!(strict_monotonic_direction(&[1.0]), None);
    }

    #[test]
    fn autocorrelation_lag_0_is_1() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(autocorrelation(&values, 0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn autocorrelation_of_alternating_series_is_negative_at_lag_1() {
        let values: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        assert!(autocorrelation(&values, 1) < -0.9);
        assert!(autocorrelation(&values, 2) > 0.8);
    }

    #[test]
    fn autocorrelation_constant_series_is_zero() {
        assert_eq!(autocorrelation(&[3.0; 10], 2), 0.0);
    }
}
