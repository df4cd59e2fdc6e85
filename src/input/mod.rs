//! Input handling.
//!
//! - hotkeys.rs: global Ctrl+D registration forwarding into the event bus

pub mod hotkeys;

pub use hotkeys::{HotkeyError, HotkeyListener, HOTKEY_LABEL};
