//! Core data structures for metric forecasting.

mod forecast;
mod series;

pub use forecast::Forecast;
pub use series::{parse_timestamp, MetricSeries};
