//! Utility functions shared by the estimators.

pub mod ols;
pub mod stats;

pub use ols::{fit_line, LineFit};
pub use stats::{autocorrelation, mean, mean_abs, population_std_dev};
