//! CLI-specific configuration for terminal UI.
use std::env;

use game_core::HexLayout;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CATTRAP_HEX_RADIUS` - Hex radius in layout pixels (default: 30)
    /// - `CATTRAP_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(radius) = read_env::<f64>("CATTRAP_HEX_RADIUS")
            && radius.is_finite()
            && radius > 0.0
        {
            config.ui.hex_radius = radius;
        }
        if let Some(height) = read_env::<u16>("CATTRAP_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Radius of one hex tile in layout pixels.
    pub hex_radius: f64,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hex_radius: HexLayout::DEFAULT_RADIUS,
            message_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
