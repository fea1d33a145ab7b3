use thiserror::Error;

/// Error type that captures failures at the library boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
}
