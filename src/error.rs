use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid planting month: {0}")]
    InvalidMonth(String),

    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Dataset error: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
