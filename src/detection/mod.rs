//! Detection utilities for metric series.
//!
//! This module provides a periodicity heuristic based on the
//! autocorrelation of the detrended series.

mod seasonality;

pub use seasonality::{
    cadence_lags, detect_seasonality, SeasonalityConfig, SeasonalityResult, NEED_MORE_DATA,
    NOT_DETECTED,
};
