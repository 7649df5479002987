//! Baseline forecasting models.
//!
//! Simple methods that need nothing beyond the raw history.

mod drift;

pub use drift::{DriftConfig, MeanDifferenceDrift};
