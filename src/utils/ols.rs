//! Ordinary Least Squares (OLS) fit of a series against its time index.
//!
//! Used by the trend estimator and, through it, by the regression forecaster.

use crate::error::{ForecastError, Result};
use crate::utils::stats;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// A straight line fitted to `y[t]` for `t = 0..n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Change per period.
    pub slope: f64,
    /// Fitted value at `t = 0`.
    pub intercept: f64,
    /// Coefficient of determination; 0 when `y` has no variance.
    pub r_squared: f64,
    /// Two-sided p-value for `slope != 0`; 1.0 when undefined.
    pub p_value: f64,
}

impl LineFit {
    /// Fitted value at index `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Fit `y = intercept + slope * t` by least squares.
///
/// Uses centered sums so that exactly linear input reproduces its slope
/// without cancellation error.
pub fn fit_line(y: &[f64]) -> Result<LineFit> {
    let n = y.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }

    let nf = n as f64;
    let mean_x = (nf - 1.0) / 2.0;
    let mean_y = stats::mean(y);

    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    let mut ss_yy = 0.0;
    for (i, &yi) in y.iter().enumerate() {
        let dx = i as f64 - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_xy += dx * dy;
        ss_yy += dy * dy;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ForecastError::ComputationError(
            "least squares produced a non-finite line".to_string(),
        ));
    }

    let ss_res: f64 = y
        .iter()
        .enumerate()
        .map(|(i, &yi)| (yi - (intercept + slope * i as f64)).powi(2))
        .sum();

    let r_squared = if ss_yy <= f64::EPSILON * mean_y.abs().max(1.0) {
        0.0
    } else {
        (1.0 - ss_res / ss_yy).clamp(0.0, 1.0)
    };

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
        p_value: slope_p_value(slope, ss_res, ss_xx, n),
    })
}

fn slope_p_value(slope: f64, ss_res: f64, ss_xx: f64, n: usize) -> f64 {
    if n < 3 || slope == 0.0 {
        return 1.0;
    }
    let dof = (n - 2) as f64;
    let stderr = (ss_res / dof / ss_xx).sqrt();
    if stderr < 1e-300 {
        return 0.0;
    }
    let t_stat = (slope / stderr).abs();
    match StudentsT::new(0.0, 1.0, dof) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}
