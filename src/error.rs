//! Error types for the metric-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while validating input or computing forecasts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data: at least one historical value is required")]
    EmptyData,

    /// A value is NaN or infinite.
    #[error("non-numeric value at index {index}: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Timestamps and values disagree in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Request body could not be decoded.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Frequency inference failed.
    #[error("could not infer frequency: {0}")]
    FrequencyInference(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl ForecastError {
    /// Whether this error stems from caller input and should be reported back verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ForecastError::EmptyData
                | ForecastError::NonFiniteValue { .. }
                | ForecastError::InvalidParameter(_)
                | ForecastError::DimensionMismatch { .. }
                | ForecastError::TimestampError(_)
                | ForecastError::MalformedRequest(_)
        )
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::MalformedRequest(err.to_string())
    }
}
