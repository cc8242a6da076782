//! Error types for dataset ingestion and configuration parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: missing column '{column}'")]
    MissingColumn { line: u64, column: &'static str },

    #[error("line {line}: invalid number in column '{column}': {value}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: feature type must not be empty")]
    EmptyFeature { line: u64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid number for key '{key}': {value}")]
    InvalidNumber {
        line: u64,
        key: String,
        value: String,
    },

    #[error("key '{key}' = {value} is out of range, expected {expected}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}
