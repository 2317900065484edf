//! File logging for the terminal client.
//!
//! The TUI owns stdout, so logs go to a per-session file under the platform
//! cache directory:
//! - macOS: `~/Library/Caches/cattrap/logs/<session>/client.log`
//! - Linux: `~/.cache/cattrap/logs/<session>/client.log`
//! - Windows: `%LOCALAPPDATA%\cattrap\cache\logs\<session>\client.log`
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform-specific log directory, falling back to `/tmp/cattrap/logs`.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "cattrap")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/cattrap"))
        .join("logs")
}

/// Install the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// Returns the log file path.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    // Only the file layer; stderr would tear the TUI.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // The writer must outlive every span, i.e. the whole process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}
