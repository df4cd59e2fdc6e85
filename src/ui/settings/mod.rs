//! Settings window.
//!
//! This module contains the settings dialog (floating widget toggle and
//! hotkey mode).

pub mod window;

pub use window::SettingsDialog;
