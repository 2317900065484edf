//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use crate::controls::GameControls;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    /// Initial values of the game controls.
    pub controls: GameControls,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, controls: GameControls) -> Self {
        Self { messages, controls }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CATTRAP_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CATTRAP_GRID_SIZE` - Board size for new games (default: 7, max 99)
    /// - `CATTRAP_DEADLINE` - Move deadline in seconds (default: 1.0)
    /// - `CATTRAP_STRATEGY` - Cat strategy (default: minimax)
    /// - `CATTRAP_DEPTH` - Search depth limit (default: 4)
    /// - `CATTRAP_ALPHA_BETA` - Alpha-beta pruning (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CATTRAP_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        let controls = &mut config.controls;
        if let Some(size) = read_env("CATTRAP_GRID_SIZE") {
            controls.size = size;
        }
        if let Some(deadline) = read_env("CATTRAP_DEADLINE") {
            controls.deadline = deadline;
        }
        if let Some(strategy) = read_env("CATTRAP_STRATEGY") {
            controls.strategy = strategy;
        }
        if let Some(depth) = read_env("CATTRAP_DEPTH") {
            controls.depth = depth;
        }
        if let Some(enabled) = read_env_bool("CATTRAP_ALPHA_BETA") {
            controls.alpha_beta = enabled;
        }
        config.controls = config.controls.normalized();

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
