//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, TelemetrySettings};
use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| AppError::TelemetryError(e.to_string()))?,
    };

    // Daily rotated file next to stderr, only when a directory is configured
    let file_appender = match &settings.log_dir {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("access")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?,
        ),
        None => None,
    };

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(file_appender.map(|appender| {
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_target(true)
                    .with_level(true)
            }))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(file_appender.map(|appender| {
                fmt::layer()
                    .with_writer(appender)
                    .with_target(true)
                    .with_ansi(false)
            }))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))?;
    tracing::debug!(level = %settings.level, format = ?settings.format, "Telemetry initialized");
    Ok(())
}
