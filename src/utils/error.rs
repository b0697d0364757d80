// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{0} is not a valid meta flag")]
    InvalidMetaFlag(String),

    #[error("'{0}' is not a valid regular expression")]
    InvalidRegexLiteral(String),

    #[error("Regular expression error: {0}")]
    InvalidRegex(#[from] regex::Error), // Engine errors propagate unchanged
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Raw item at index {index} has neither text nor value")]
    MissingField { index: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
