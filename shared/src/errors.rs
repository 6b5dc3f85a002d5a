//! Error types shared across the Fitness Planner crates

use thiserror::Error;

/// Failures when decoding a portable plan document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not well-formed JSON
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// The JSON does not describe a (profile, plan) pair
    #[error("Invalid plan shape: {0}")]
    InvalidShape(String),
}
