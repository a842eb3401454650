//! Diagnostic logging setup for the binary.
//!
//! Logs go to stderr (stdout carries the protocol) and, when configured,
//! to a file. The protocol core only emits `tracing` events and never
//! depends on anything here.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

const LOG_FILE_PREFIX: &str = "ask-youtube-transcript";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level {level:?}: {source}")]
    Filter {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("cannot create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log file path has no file name: {0}")]
    NoFileName(PathBuf),
    #[error("failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Where the file layer writes, if anywhere.
///
/// An explicit file wins over a directory; a directory gets a file named
/// after `timestamp` (`YYYYmmdd-HHMMSS`).
pub fn resolve_log_file(config: &LogConfig, timestamp: &str) -> Option<PathBuf> {
    if let Some(file) = &config.file {
        return Some(file.clone());
    }
    config
        .dir
        .as_ref()
        .map(|dir| dir.join(format!("{LOG_FILE_PREFIX}-{timestamp}.log")))
}

/// Build the stderr filter: `RUST_LOG` if set, else the configured level.
pub fn stderr_filter(config: &LogConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|source| LoggingError::Filter {
            level: config.level.clone(),
            source,
        }),
    }
}

/// Install the global subscriber.
///
/// Returns the log file path (if any) and the guard that flushes the file
/// writer; keep the guard alive for the life of the process.
pub fn init(config: &LogConfig) -> Result<(Option<PathBuf>, Option<WorkerGuard>), LoggingError> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let log_file = resolve_log_file(config, &timestamp);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter(config)?);

    let (file_layer, guard) = match &log_file {
        Some(path) => {
            let (dir, name) = split_path(path)?;
            std::fs::create_dir_all(&dir).map_err(|source| LoggingError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok((log_file, guard))
}

fn split_path(path: &Path) -> Result<(PathBuf, PathBuf), LoggingError> {
    let name = path
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| LoggingError::NoFileName(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, name))
}
