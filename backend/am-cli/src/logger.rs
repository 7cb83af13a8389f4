use crate::{CliError, CliErrorResult};

use am_config::LoggingConfig;

use std::path::Path;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{LevelFilter, info};

/// Route `log` records to `log_file`, or to stderr when there is none.
///
/// Stdout is left to the command's JSON output. Colors only apply to stderr.
pub fn initialize(logging: &LoggingConfig, log_file: Option<&Path>) -> CliErrorResult<()> {
    let level_filter = logging.level.0;

    let output: Output = match log_file {
        Some(path) => fern::log_file(path)
            .map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?
            .into(),
        None => std::io::stderr().into(),
    };

    let colors = (log_file.is_none() && logging.colored).then(|| {
        ColoredLevelConfig::new()
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .level(level_filter)
        .level_for("sqlx", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = match colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                level,
                message,
                record.target(),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!(
        "Logging at {} to {}",
        level_filter,
        log_file.map_or_else(|| "stderr".to_string(), |p| p.display().to_string())
    );

    // sqlx reports through tracing
    tracing_log::LogTracer::init().ok();

    Ok(())
}
