// src/error.rs

use thiserror::Error;

/// Global Application Error Enum.
/// Everything the grading crate can fail with ends up here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Nothing was recorded for the result being looked at.
    #[error("not found: {0}")]
    NotFound(String),

    /// A configuration value could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry setup failed: {0}")]
    Telemetry(String),
}

impl AppError {
    /// Returns `true` for the "nothing to re-evaluate" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<tracing_subscriber::filter::ParseError> for AppError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for AppError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        AppError::Telemetry(err.to_string())
    }
}
