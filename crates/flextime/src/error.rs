//! Error types for flextime operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Unparseable input: {0}")]
    Parse(String),

    #[error("Invalid format template: {0}")]
    Format(String),

    #[error("Invalid timezone: {0}")]
    Zone(String),
}

pub type Result<T> = std::result::Result<T, TimeError>;
