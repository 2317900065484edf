//! Ratatui styling for the board and panels.
//!
//! Panel colors follow the host-provided [`Theme`]; tile colors are fixed so
//! the board reads the same in both themes.

use client_frontend_core::message::MessageLevel;
use game_core::Tile;
use ratatui::style::{Color, Modifier, Style};
use runtime::{ConnectionStatus, Theme};

pub const CAT_GLYPH: &str = "🐈";

const BLOCKED: Color = Color::Rgb(0x80, 0x80, 0x80);
const CAT_BACKGROUND: Color = Color::Rgb(0xe8, 0xec, 0xf7);
const EMPTY: Color = Color::Rgb(0x54, 0xb9, 0xf8);
const OUTLINE: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

/// Concrete styling derived from the active host theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatatuiTheme {
    pub background: Color,
    pub foreground: Color,
}

impl RatatuiTheme {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: parse_hex_color(&theme.background).unwrap_or(Color::Reset),
            foreground: parse_hex_color(&theme.foreground).unwrap_or(Color::Reset),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub fn tile_fill(&self, tile: Tile) -> Color {
        match tile {
            Tile::Empty => EMPTY,
            Tile::Blocked => BLOCKED,
            Tile::Cat => CAT_BACKGROUND,
        }
    }

    pub fn outline(&self) -> Color {
        OUTLINE
    }

    pub fn connection(&self, status: ConnectionStatus) -> Style {
        let color = match status {
            ConnectionStatus::Connected => Color::Green,
            ConnectionStatus::Connecting => Color::Yellow,
            ConnectionStatus::Disconnected => Color::Red,
        };
        self.base().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => self.base(),
            MessageLevel::Warning => self.base().fg(Color::Yellow),
            MessageLevel::Error => self.base().fg(Color::Red),
        }
    }

    pub fn highlight(&self) -> Style {
        self.base()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        self.base().add_modifier(Modifier::DIM)
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Parse `#rrggbb` into an RGB color.
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
