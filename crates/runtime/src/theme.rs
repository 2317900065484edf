//! Color themes the host pushes to the renderer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Named theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(self) -> Theme {
        let (background, foreground) = match self {
            Self::Dark => ("#1e1e1e", "#d4d4d4"),
            Self::Light => ("#ffffff", "#333333"),
        };
        Theme {
            kind: self,
            background: background.to_owned(),
            foreground: foreground.to_owned(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeKind {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Background and foreground colors as `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: String,
    pub foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().palette()
    }
}
