//! Error types for the circulation system

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ingestion failed at line {line}: {reason}")]
    Ingestion { line: usize, reason: String },

    #[error("Duplicate unique id: {0}")]
    Duplicate(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
