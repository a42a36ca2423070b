//! Error types for shipfee

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// shipfee errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid weight: {0} (must be greater than 0 and at most 50 kg)")]
    InvalidWeight(f64),

    #[error("invalid zone: {0}")]
    InvalidZone(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
