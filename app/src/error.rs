//! Application error handling
//!
//! This module provides the unified error type surfaced at the session
//! boundary. All variants are terminal: nothing is retried automatically,
//! the user re-triggers the action.

use fitness_planner_shared::DocumentError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No API key is configured")]
    MissingCredential,

    #[error("The API key appears to be invalid or has expired")]
    InvalidCredential,

    #[error("Plan generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Error reading the selected file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
