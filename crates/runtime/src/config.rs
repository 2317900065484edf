//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use crate::theme::ThemeKind;

pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8765";

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub server_url: String,
    /// Fixed delay between a lost connection and the next attempt.
    pub reconnect_delay: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub theme: ThemeKind,
    /// Log directory name; generated from the start time when unset.
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            reconnect_delay: Duration::from_millis(2000),
            event_buffer_size: 64,
            command_buffer_size: 32,
            theme: ThemeKind::Dark,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CATTRAP_SERVER_URL` - Game server URL (default: ws://localhost:8765)
    /// - `CATTRAP_RECONNECT_DELAY_MS` - Delay before reconnecting (default: 2000)
    /// - `CATTRAP_EVENT_BUFFER` - Event bus capacity (default: 64)
    /// - `CATTRAP_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `CATTRAP_THEME` - `dark` or `light` (default: dark)
    /// - `CATTRAP_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("CATTRAP_SERVER_URL")
            && !url.trim().is_empty()
        {
            config.server_url = url.trim().to_owned();
        }

        if let Some(delay) = read_env::<u64>("CATTRAP_RECONNECT_DELAY_MS") {
            config.reconnect_delay = Duration::from_millis(delay);
        }

        if let Some(capacity) = read_env::<usize>("CATTRAP_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("CATTRAP_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(theme) = read_env::<ThemeKind>("CATTRAP_THEME") {
            config.theme = theme;
        }

        config.session_id = env::var("CATTRAP_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
