// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Pattern {name} failed to compile: {source}")]
    Pattern {
        name: String,
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown extractor: {0}")]
    UnknownExtractor(String),

    #[error("Input is {size} bytes, limit is {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Serialization(err.to_string())
    }
}
