//! Validation of caller input.

pub mod input;

pub use input::{SeriesValidator, DEFAULT_PERIODS_AHEAD, MAX_PERIODS_AHEAD};
