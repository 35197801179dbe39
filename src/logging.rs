use anyhow::{Result, anyhow};
use tracing_appender::{non_blocking::WorkerGuard, rolling};

use crate::config::Config;

/// Installs the global subscriber with a rolling daily log file.
///
/// The returned guard must be kept alive for the lifetime of the session;
/// dropping it flushes and stops the background writer.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
