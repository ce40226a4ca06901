// src/telemetry.rs

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Logs go to stdout, and additionally to `<log_dir>/grading.log` (rotated
/// daily) when a log directory is configured. Keep the returned guard alive
/// for as long as file logging should keep flushing.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_new(&config.rust_log)?;
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "grading.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Tracing initialized (level: {})", config.rust_log);

    Ok(guard)
}
