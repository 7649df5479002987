//! Forecast result structure for holding predictions.

/// Point predictions for the periods following the last observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    /// point[h - 1] is the prediction h periods ahead.
    point: Vec<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { point: values }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.point
    }

    pub fn first(&self) -> Option<f64> {
        self.point.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.point.last().copied()
    }

    /// Whether every prediction is a finite number.
    pub fn is_finite(&self) -> bool {
        self.point.iter().all(|v| v.is_finite())
    }

    /// Pull predictions toward `anchor` geometrically: `anchor + phi^h * (y[h] - anchor)`.
    pub fn damped_toward(mut self, anchor: f64, phi: f64) -> Self {
        let mut factor = 1.0;
        for value in self.point.iter_mut() {
            factor *= phi;
            *value = anchor + factor * (*value - anchor);
        }
        self
    }

    /// Clamp negative predictions to zero.
    pub fn floored_at_zero(mut self) -> Self {
        for value in self.point.iter_mut() {
            *value = value.max(0.0);
        }
        self
    }

    pub fn into_values(self) -> Vec<f64> {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forecast_empty_state_reflects_missing_values() {
        let forecast = Forecast::new();
        assert!(forecast.is_empty());
        assert_eq!(forecast.horizon(), 0);
        assert_eq!(forecast.first(), None);

        let forecast = Forecast::from_values(vec![1.0, 2.0, 3.0]);
        assert!(!forecast.is_empty());
        assert_eq!(forecast.horizon(), 3);
        assert_eq!(forecast.first(), Some(1.0));
        assert_eq!(forecast.last(), Some(3.0));
    }

    #[test]
    fn damping_converges_toward_anchor() {
        let forecast = Forecast::from_values(vec![12.0, 14.0, 16.0]).damped_toward(10.0, 0.5);
        assert_relative_eq!(forecast.values()[0], 11.0, epsilon = 1e-12);
        assert_relative_eq!(forecast.values()[1], 11.0, epsilon = 1e-12);
        assert_relative_eq!(forecast.values()[2], 10.75, epsilon = 1e-12);
    }

    #[test]
    fn unit_damping_is_identity() {
        let forecast = Forecast::from_values(vec![3.0, -1.0]).damped_toward(100.0, 1.0);
        assert_eq!(forecast.values(), &[3.0, -1.0]);
    }

    #[test]
    fn floor_clamps_negative_predictions() {
        let forecast = Forecast::from_values(vec![2.0, 0.5, -1.0]).floored_at_zero();
        assert_eq!(forecast.values(), &[2.0, 0.5, 0.0]);
    }

    #[test]
    fn finiteness_check_detects_overflow() {
        assert!(Forecast::from_values(vec![1.0, 2.0]).is_finite());
        assert!(!Forecast::from_values(vec![1.0, f64::INFINITY]).is_finite());
    }
}
