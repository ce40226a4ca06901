// src/lib.rs

pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod telemetry;

// Re-export specific items for convenience
pub use error::AppError;
pub use grading::{GradingEngine, VerdictPolicy, grade, reevaluate, review};
