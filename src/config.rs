// src/config.rs

use std::env;

use dotenvy::dotenv;

use crate::{
    error::AppError,
    grading::{GradingEngine, VerdictPolicy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rust_log: String,

    /// Directory for the daily rolling log file. Stdout only when unset.
    pub log_dir: Option<String>,

    pub verdict_policy: VerdictPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            log_dir: None,
            verdict_policy: VerdictPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let log_dir = lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty());

        let verdict_policy = match lookup("GRADING_POLICY") {
            Some(raw) => raw.parse()?,
            None => VerdictPolicy::default(),
        };

        Ok(Self {
            rust_log,
            log_dir,
            verdict_policy,
        })
    }

    pub fn engine(&self) -> GradingEngine {
        GradingEngine::new(self.verdict_policy)
    }
}
