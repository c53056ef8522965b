//! Error types for the production_forecast crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the production_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The artifact file does not exist at the configured path
    #[error("Artifact file '{path}' not found. Run the trainer to regenerate it before starting a session.")]
    MissingArtifact { path: String },

    /// The artifact file exists but cannot be deserialized
    #[error("Artifact format error: {0}")]
    ArtifactFormat(String),

    /// A selected month name is outside the twelve calendar months
    #[error("Unknown month: '{0}'")]
    UnknownMonth(String),

    /// A product name was not part of the encoder's training vocabulary
    #[error("Unknown product: '{0}' was not seen during training")]
    UnknownProduct(String),

    /// The input batch does not match the regressor's feature schema
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Error from the prediction call itself
    #[error("Prediction error: {0}")]
    PredictionError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),

    /// Error from CSV export
    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::ArtifactFormat(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}
