//! Tracing subscriber setup

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE_NAME: &str = "diffsift.log";

pub fn parse_level(level: &str) -> CoreResult<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| CoreError::InvalidLogLevel(level.to_string()))
}

/// Install the global fmt subscriber.
///
/// Logs go to stderr, or to `<dir>/diffsift.log` through a non-blocking
/// writer when `dir` is set. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init(level: &str, dir: Option<&Path>) -> CoreResult<Option<WorkerGuard>> {
    let level = parse_level(level)?;

    match dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}
