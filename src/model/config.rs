//! Application configuration (pure Rust, no I/O).
//!
//! This module defines the config structure persisted to `config.json`.
//! Loading and saving live in `storage::config`.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// What hides the main window after it was summoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HotkeyMode {
    /// Clicking outside the window hides it; the hotkey only shows.
    #[default]
    ExternalClickHides,
    /// Pressing the hotkey again hides the window.
    HotkeyTogglesHides,
}

impl HotkeyMode {
    /// Returns a human-readable label for the settings dialog.
    pub fn label(self) -> &'static str {
        match self {
            HotkeyMode::ExternalClickHides => "Mode A: clicking outside the window hides it",
            HotkeyMode::HotkeyTogglesHides => "Mode B: pressing the hotkey again hides it",
        }
    }
}

impl From<HotkeyMode> for u8 {
    fn from(mode: HotkeyMode) -> Self {
        match mode {
            HotkeyMode::ExternalClickHides => HOTKEY_MODE_EXTERNAL_CLICK,
            HotkeyMode::HotkeyTogglesHides => HOTKEY_MODE_HOTKEY_TOGGLE,
        }
    }
}

impl TryFrom<u8> for HotkeyMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            HOTKEY_MODE_EXTERNAL_CLICK => Ok(HotkeyMode::ExternalClickHides),
            HOTKEY_MODE_HOTKEY_TOGGLE => Ok(HotkeyMode::HotkeyTogglesHides),
            other => Err(format!("unknown hotkey_mode {other}")),
        }
    }
}

/// Complete application config, serializable to/from `config.json`.
///
/// Both fields are required on disk; a file missing either one is treated
/// as corrupt and replaced with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Show the floating launcher (takes effect on restart).
    pub enable_floating: bool,
    /// Hide behaviour of the main window.
    pub hotkey_mode: HotkeyMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_floating: DEFAULT_ENABLE_FLOATING,
            hotkey_mode: HotkeyMode::default(),
        }
    }
}
