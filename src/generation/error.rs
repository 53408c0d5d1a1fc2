use std::path::PathBuf;
use thiserror::Error;

/// Generation-specific errors
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Generator binary not found: {0}")]
    BinaryNotFound(PathBuf),

    #[error("Generator failed: {0}")]
    Failed(String),

    #[error("Generator produced invalid UTF-8 output")]
    InvalidOutput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
