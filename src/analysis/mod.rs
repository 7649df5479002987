//! Interpretation of computed statistics: confidence labels and insight text.

pub mod confidence;
pub mod insights;

pub use confidence::{ConfidenceLevel, ConfidencePolicy};
pub use insights::{pattern_insights, prediction_insights, PatternFacts, PredictionFacts};
