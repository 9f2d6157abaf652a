use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyploidError {
    /// Bad run parameters (empty file name, zero counts, loci that
    /// do not match the data)
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Error opening {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error writing records: {0}")]
    Csv(#[from] csv::Error),

    /// Empty data handed to a pipeline stage
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Length mismatch: expected {expected} markers, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PolyploidError>;

impl PolyploidError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
