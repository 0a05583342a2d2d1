use thiserror::Error;

/// Host-layer failures. Validation verdicts are not errors; they travel as
/// [`crate::core::validator::ValidationReport`] data.
#[derive(Error, Debug)]
pub enum RoiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Scenario file error: {message}")]
    ScenarioError { message: String },
}

pub type Result<T> = std::result::Result<T, RoiError>;
