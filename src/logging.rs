//! Log setup
//!
//! The deck draws to the alternate screen, so logs can only go to a file.
//! Without a configured file no subscriber is installed and every `tracing`
//! macro is a no-op.

use crate::config::LogConfig;
use crate::error::{DeckError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_err<E: std::fmt::Display>(e: E) -> DeckError {
    DeckError::Logging(e.to_string())
}

/// Build the filter: `RUST_LOG` when set, else `level`
pub fn filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(init_err),
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the
/// background writer.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| DeckError::Logging(format!("not a file path: {}", path.display())))?;
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(&config.level)?)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .map_err(init_err)?;

    tracing::info!(path = %path.display(), level = %config.level, "logging initialised");
    Ok(Some(guard))
}
