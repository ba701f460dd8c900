// src/services/theme.rs
//! Theme and accent preferences
//!
//! Two independent key/value settings, read once at startup. Parsing is
//! lenient: an absent or unrecognized stored value falls back to the fixed
//! default instead of failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::session::KeyValueStorage;

pub const THEME_MODE_KEY: &str = "bookme.theme_mode";
pub const ACCENT_KEY: &str = "bookme.accent";

/// Theme mode: light, dark, or follow the system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// Accent color choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Violet,
    Ocean,
    Sunset,
    Forest,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Violet => "violet",
            Accent::Ocean => "ocean",
            Accent::Sunset => "sunset",
            Accent::Forest => "forest",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "violet" => Some(Accent::Violet),
            "ocean" => Some(Accent::Ocean),
            "sunset" => Some(Accent::Sunset),
            "forest" => Some(Accent::Forest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreferences {
    pub mode: ThemeMode,
    pub accent: Accent,
}

impl ThemePreferences {
    /// Read preferences from storage, falling back per key
    pub fn load<K: KeyValueStorage>(storage: &K) -> Self {
        let mode = storage
            .get(THEME_MODE_KEY)
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or_default();
        let accent = storage
            .get(ACCENT_KEY)
            .and_then(|v| Accent::parse(&v))
            .unwrap_or_default();

        debug!(mode = mode.as_str(), accent = accent.as_str(), "Theme preferences loaded");
        Self { mode, accent }
    }

    /// Persist both settings under their independent keys
    pub fn save<K: KeyValueStorage>(&self, storage: &mut K) {
        storage.set(THEME_MODE_KEY, self.mode.as_str());
        storage.set(ACCENT_KEY, self.accent.as_str());
    }
}
